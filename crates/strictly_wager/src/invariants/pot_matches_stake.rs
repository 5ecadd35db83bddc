//! Pot matches stake: an active pot is exactly both stakes.

use super::super::round::RoundState;
use super::Invariant;

/// Invariant: while a round is active, the pot is twice the stake.
pub struct PotMatchesStakeInvariant;

impl Invariant<RoundState> for PotMatchesStakeInvariant {
    fn holds(state: &RoundState) -> bool {
        match state {
            RoundState::Active(round) => round.stake().checked_mul(2) == Some(*round.pot()),
            RoundState::Negotiating(_) => true,
        }
    }

    fn description() -> &'static str {
        "Active pot equals twice the stake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::ActiveRound;

    #[test]
    fn test_matching_pot_holds() {
        assert!(PotMatchesStakeInvariant::holds(&RoundState::Active(ActiveRound::start(50, 100))));
    }

    #[test]
    fn test_short_pot_violates() {
        assert!(!PotMatchesStakeInvariant::holds(&RoundState::Active(ActiveRound::start(50, 99))));
    }
}
