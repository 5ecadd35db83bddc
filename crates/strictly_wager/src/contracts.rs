//! Preconditions for table commands.
//!
//! Every command checks its preconditions before touching any state, which
//! is what makes a failed command a no-op. Postconditions are the session
//! invariants, checked after every successful command.

use super::error::{MoveRejection, RoundError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::position::Position;
use super::round::{ActiveRound, Negotiation};
use super::session::{GameSession, Mode};
use tracing::{error, instrument};

/// Largest stake: twice of it must still fit in a balance.
pub const MAX_BET: u64 = u64::MAX / 2;

// ─────────────────────────────────────────────────────────────
//  Negotiation Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a bet is positive and can be doubled into a pot.
pub struct BetInRange;

impl BetInRange {
    /// Checks a proposed bet.
    pub fn check(amount: u64) -> Result<(), RoundError> {
        if amount == 0 || amount > MAX_BET {
            Err(RoundError::InvalidBet { amount })
        } else {
            Ok(())
        }
    }
}

/// Precondition: there is a bet to accept.
pub struct BetOnTable;

impl BetOnTable {
    /// Checks that the negotiation carries a bet.
    pub fn check(negotiation: &Negotiation) -> Result<(), RoundError> {
        if *negotiation.bet() == 0 {
            Err(RoundError::NoBetSet)
        } else {
            Ok(())
        }
    }
}

/// Precondition: a positive bet that both seats accepted.
///
/// Funds are not checked here; the ledger checks and debits both seats in
/// one step.
pub struct StakeAgreed;

impl StakeAgreed {
    /// Checks that a round may start from this negotiation.
    #[instrument]
    pub fn check(negotiation: &Negotiation) -> Result<(), RoundError> {
        BetInRange::check(*negotiation.bet())?;
        if !negotiation.both_accepted() {
            return Err(RoundError::BetNotAccepted);
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the seat to move is played by a human.
pub struct HumanToMove;

impl HumanToMove {
    /// Checks that input-layer moves are allowed now.
    pub fn check(mode: Mode, round: &ActiveRound) -> Result<(), RoundError> {
        let turn = *round.turn();
        if mode.is_automated(turn) {
            Err(RoundError::NotYourTurn(turn))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the seat to move is played by the opponent strategy.
pub struct AutomatedToMove;

impl AutomatedToMove {
    /// Checks that the opponent step is allowed now.
    pub fn check(mode: Mode, round: &ActiveRound) -> Result<(), RoundError> {
        let turn = *round.turn();
        if mode.is_automated(turn) {
            Ok(())
        } else {
            Err(RoundError::OpponentNotToMove(turn))
        }
    }
}

/// Precondition: the index names an empty cell.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Resolves a raw cell index to an empty position.
    #[instrument(skip(round))]
    pub fn check(round: &ActiveRound, index: usize) -> Result<Position, RoundError> {
        let position = Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))?;
        if !round.board().is_empty(position) {
            return Err(MoveRejection::Occupied(position).into());
        }
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Checks all session invariants; panics on violation in debug builds.
#[instrument(skip(session))]
pub fn assert_invariants(session: &GameSession) {
    let result = SessionInvariants::check_all(session.state());
    if let Err(violations) = &result {
        for violation in violations {
            error!(invariant = %violation.description, "Session invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Session invariants violated: {:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seat;

    fn negotiation(bet: u64, accept_x: bool, accept_o: bool) -> Negotiation {
        let mut n = Negotiation::fresh();
        n.set_bet(bet);
        if accept_x {
            n.toggle(Seat::X);
        }
        if accept_o {
            n.toggle(Seat::O);
        }
        n
    }

    #[test]
    fn test_bet_in_range() {
        assert_eq!(BetInRange::check(0), Err(RoundError::InvalidBet { amount: 0 }));
        assert!(BetInRange::check(1).is_ok());
        assert!(BetInRange::check(MAX_BET).is_ok());
        assert!(BetInRange::check(MAX_BET + 1).is_err());
    }

    #[test]
    fn test_stake_agreed_needs_both() {
        assert_eq!(
            StakeAgreed::check(&negotiation(100, true, false)),
            Err(RoundError::BetNotAccepted)
        );
        assert_eq!(
            StakeAgreed::check(&negotiation(100, false, true)),
            Err(RoundError::BetNotAccepted)
        );
        assert!(StakeAgreed::check(&negotiation(100, true, true)).is_ok());
    }

    #[test]
    fn test_stake_agreed_rejects_zero_bet_first() {
        assert_eq!(
            StakeAgreed::check(&Negotiation::fresh()),
            Err(RoundError::InvalidBet { amount: 0 })
        );
    }

    #[test]
    fn test_turn_ownership() {
        let round = ActiveRound::start(10, 20);
        assert!(HumanToMove::check(Mode::VsOpponent, &round).is_ok());
        assert_eq!(
            AutomatedToMove::check(Mode::VsOpponent, &round),
            Err(RoundError::OpponentNotToMove(Seat::X))
        );

        let mut round = round;
        round.place(Position::Center).unwrap();
        assert_eq!(
            HumanToMove::check(Mode::VsOpponent, &round),
            Err(RoundError::NotYourTurn(Seat::O))
        );
        assert!(HumanToMove::check(Mode::PvP, &round).is_ok());
        assert!(AutomatedToMove::check(Mode::VsOpponent, &round).is_ok());
    }

    #[test]
    fn test_legal_placement() {
        let mut round = ActiveRound::start(10, 20);
        round.place(Position::Center).unwrap();
        assert_eq!(LegalPlacement::check(&round, 0), Ok(Position::TopLeft));
        assert_eq!(
            LegalPlacement::check(&round, 4),
            Err(RoundError::InvalidMove(MoveRejection::Occupied(Position::Center)))
        );
        assert_eq!(
            LegalPlacement::check(&round, 9),
            Err(RoundError::InvalidMove(MoveRejection::OutOfRange(9)))
        );
    }
}
