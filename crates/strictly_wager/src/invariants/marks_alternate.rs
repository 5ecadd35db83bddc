//! Marks alternate: X opens, and the seat to move matches the mark counts.

use super::super::round::RoundState;
use super::super::types::Seat;
use super::Invariant;

/// Invariant: X moves first and seats alternate.
///
/// On an active board X has as many marks as O or one more, and the seat
/// to move is X exactly when the counts are equal. Undo keeps this because
/// the turn returns to the seat whose mark was removed.
pub struct MarksAlternateInvariant;

impl Invariant<RoundState> for MarksAlternateInvariant {
    fn holds(state: &RoundState) -> bool {
        let RoundState::Active(round) = state else {
            return true;
        };
        let x = round.board().count(Seat::X);
        let o = round.board().count(Seat::O);
        match (x.checked_sub(o), round.turn()) {
            (Some(0), Seat::X) => true,
            (Some(1), Seat::O) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Seats alternate starting with X"
    }
}
