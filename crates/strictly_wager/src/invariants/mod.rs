//! Session invariants.
//!
//! Properties that hold after every successful command. The session checks
//! them as postconditions; tests check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod bet_before_acceptance;
pub mod marks_alternate;
pub mod pot_matches_stake;

pub use bet_before_acceptance::BetBeforeAcceptanceInvariant;
pub use marks_alternate::MarksAlternateInvariant;
pub use pot_matches_stake::PotMatchesStakeInvariant;

/// Every invariant of a table session.
pub type SessionInvariants = (
    MarksAlternateInvariant,
    PotMatchesStakeInvariant,
    BetBeforeAcceptanceInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundState;

    #[test]
    fn test_fresh_state_holds() {
        assert!(SessionInvariants::check_all(&RoundState::fresh()).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Pair = (MarksAlternateInvariant, PotMatchesStakeInvariant);
        assert!(Pair::check_all(&RoundState::fresh()).is_ok());
    }

    #[test]
    fn test_violations_are_collected() {
        let mut round = crate::round::ActiveRound::start(10, 7);
        round.place(crate::Position::Center).unwrap();
        round.board_mut_for_tests().place(crate::Position::TopLeft, crate::Seat::X).unwrap();
        let violations = SessionInvariants::check_all(&RoundState::Active(round)).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
