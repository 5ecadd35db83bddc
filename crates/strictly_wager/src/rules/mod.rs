//! Board rules: win lines, draw detection, outcome evaluation.
//!
//! Rules are pure functions over a [`Board`]; the round controller decides
//! what an outcome means for the pot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinLine, find_winning_line};

use super::types::{Board, Seat};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and empty cells remain.
    Ongoing,
    /// A seat completed a line.
    Win {
        /// The winning seat.
        seat: Seat,
        /// First completed line in canonical order.
        line: WinLine,
    },
    /// All cells occupied with no completed line.
    Draw,
}

/// Evaluates a board: a win takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((seat, line)) = find_winning_line(board) {
        return Outcome::Win { seat, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        let layout = [
            Seat::X, Seat::X, Seat::X,
            Seat::O, Seat::O, Seat::X,
            Seat::X, Seat::O, Seat::O,
        ];
        for (pos, seat) in Position::ALL.into_iter().zip(layout) {
            board.place(pos, seat).unwrap();
        }
        assert!(matches!(evaluate(&board), Outcome::Win { seat: Seat::X, .. }));
    }
}
