//! Bet before acceptance: nobody has accepted a bet that does not exist.

use super::super::round::RoundState;
use super::super::types::Seat;
use super::Invariant;

/// Invariant: with no bet on the table, neither seat is marked accepted.
pub struct BetBeforeAcceptanceInvariant;

impl Invariant<RoundState> for BetBeforeAcceptanceInvariant {
    fn holds(state: &RoundState) -> bool {
        match state {
            RoundState::Negotiating(n) if *n.bet() == 0 => {
                !n.accepted(Seat::X) && !n.accepted(Seat::O)
            }
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Acceptance requires a bet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Negotiation;

    #[test]
    fn test_fresh_holds() {
        assert!(BetBeforeAcceptanceInvariant::holds(&RoundState::fresh()));
    }

    #[test]
    fn test_accepted_bet_holds() {
        let mut n = Negotiation::fresh();
        n.set_bet(20);
        n.toggle(Seat::O);
        assert!(BetBeforeAcceptanceInvariant::holds(&RoundState::Negotiating(n)));
    }

    #[test]
    fn test_acceptance_without_bet_violates() {
        let mut n = Negotiation::fresh();
        n.toggle(Seat::X);
        assert!(!BetBeforeAcceptanceInvariant::holds(&RoundState::Negotiating(n)));
    }
}
