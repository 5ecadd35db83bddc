//! Opponent strategies for the automated seat.

use super::config::WagerConfig;
use super::position::Position;
use super::types::{Board, Seat};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Chooses moves for an automated seat.
///
/// Implementations only pick a cell; the session validates and applies it
/// like any other move.
pub trait OpponentStrategy: Send + std::fmt::Debug {
    /// Picks an empty cell for `seat`. Returns `None` only when the board
    /// has no empty cell.
    fn choose_move(&mut self, board: &Board, seat: Seat) -> Option<Position>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Uniform random choice among empty cells.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    name: String,
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates a random opponent seeded from the OS.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible random opponent.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the opponent described by the configuration.
    #[instrument(skip(config), fields(seed = ?config.opponent_seed()))]
    pub fn from_config(config: &WagerConfig) -> Self {
        match config.opponent_seed() {
            Some(seed) => Self::seeded("CPU", *seed),
            None => Self::new("CPU"),
        }
    }
}

impl OpponentStrategy for RandomOpponent {
    #[instrument(skip(self, board), fields(opponent = %self.name))]
    fn choose_move(&mut self, board: &Board, seat: Seat) -> Option<Position> {
        let open = Position::valid_moves(board);
        let choice = open.choose(&mut self.rng).copied();
        debug!(%seat, ?choice, open = open.len(), "Opponent chose position");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Picks the first empty cell in index order.
#[derive(Debug, Clone)]
pub struct FirstEmptyOpponent {
    name: String,
}

impl FirstEmptyOpponent {
    /// Creates a first-empty opponent.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl OpponentStrategy for FirstEmptyOpponent {
    #[instrument(skip(self, board), fields(opponent = %self.name))]
    fn choose_move(&mut self, board: &Board, _seat: Seat) -> Option<Position> {
        Position::ALL.iter().copied().find(|&pos| board.is_empty(pos))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_only_picks_empty_cells() {
        let mut board = Board::new();
        for pos in &Position::ALL[..8] {
            board.place(*pos, Seat::X).unwrap();
        }
        let mut opponent = RandomOpponent::seeded("cpu", 7);
        for _ in 0..20 {
            assert_eq!(
                opponent.choose_move(&board, Seat::O),
                Some(Position::BottomRight)
            );
        }
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let board = Board::new();
        let mut a = RandomOpponent::seeded("a", 42);
        let mut b = RandomOpponent::seeded("b", 42);
        for _ in 0..10 {
            assert_eq!(a.choose_move(&board, Seat::O), b.choose_move(&board, Seat::O));
        }
    }

    #[test]
    fn test_random_covers_several_cells() {
        let board = Board::new();
        let mut opponent = RandomOpponent::seeded("cpu", 1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(opponent.choose_move(&board, Seat::O));
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_full_board_has_no_choice() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Seat::X).unwrap();
        }
        assert_eq!(RandomOpponent::seeded("cpu", 3).choose_move(&board, Seat::O), None);
        assert_eq!(FirstEmptyOpponent::new("first").choose_move(&board, Seat::O), None);
    }

    #[test]
    fn test_first_empty_is_deterministic() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Seat::X).unwrap();
        let mut opponent = FirstEmptyOpponent::new("first");
        assert_eq!(
            opponent.choose_move(&board, Seat::O),
            Some(Position::TopCenter)
        );
    }
}
