//! Draw detection.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::{evaluate, Outcome};
    use super::*;
    use crate::{Position, Seat};

    fn fill(layout: [Seat; 9]) -> Board {
        let mut board = Board::new();
        for (pos, seat) in Position::ALL.into_iter().zip(layout) {
            board.place(pos, seat).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Seat::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        use Seat::{O, X};
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
