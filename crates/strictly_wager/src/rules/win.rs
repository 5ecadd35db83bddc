//! Win detection.

use super::super::{Board, Cell, Position, Seat};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }
}

/// The 8 lines in canonical order: rows, columns, diagonals.
pub const LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line and its owner, if any.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Seat, WinLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        match first {
            Cell::Occupied(seat) if board.get(b) == first && board.get(c) == first => {
                Some((seat, *line))
            }
            _ => None,
        }
    })
}
