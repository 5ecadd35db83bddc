//! Core domain types for the wager table.

use super::error::MoveRejection;
use super::position::Position;
use super::rules::{self, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two fixed seats at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Seat {
    /// Seat X (moves first in every round).
    #[display("X")]
    X,
    /// Seat O (bound to the opponent strategy in vs-opponent mode).
    #[display("O")]
    O,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::X => Seat::O,
            Seat::O => Seat::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a seat's mark.
    Occupied(Seat),
}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Places a seat's mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection::Occupied`] if the cell already holds a mark.
    /// The board is left untouched on failure.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, seat: Seat) -> Result<(), MoveRejection> {
        if !self.is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(seat);
        Ok(())
    }

    /// Empties a cell regardless of its content.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Clears all cells.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Evaluates the board: win, draw, or still ongoing.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding the given seat's mark.
    pub fn count(&self, seat: Seat) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(seat))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key, matching the numeric keys
    /// players use to pick a cell.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(seat) => seat.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell() {
        let mut board = Board::new();
        board.place(Position::Center, Seat::X).unwrap();
        assert_eq!(board.get(Position::Center), Cell::Occupied(Seat::X));
        assert_eq!(board.count(Seat::X), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(Position::Center, Seat::X).unwrap();
        let before = board.clone();

        let result = board.place(Position::Center, Seat::O);
        assert_eq!(result, Err(MoveRejection::Occupied(Position::Center)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Seat::X).unwrap();
        board.place(Position::BottomRight, Seat::O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_uses_one_based_keys() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Seat::X).unwrap();
        board.place(Position::Center, Seat::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_seat_opponent() {
        assert_eq!(Seat::X.opponent(), Seat::O);
        assert_eq!(Seat::O.opponent(), Seat::X);
    }
}
