//! Table commands.
//!
//! Commands are the only way the input layer changes a session. They carry
//! intent only; the session validates them against its current phase.

use super::session::Mode;
use super::types::Seat;
use serde::{Deserialize, Serialize};

/// A request from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Put a bet on the table.
    SetBet(u64),
    /// Flip a seat's acceptance of the bet.
    ToggleAccept(Seat),
    /// Move both stakes into the pot and begin play.
    StartRound,
    /// Place the human seat's mark at a cell index (0..=8).
    AttemptMove(usize),
    /// Let the automated seat move.
    PlayOpponent,
    /// Take back the last placement.
    Undo,
    /// Abandon the round or negotiation.
    Cancel,
    /// Clear the board and bet.
    NewGame,
    /// Change who plays seat O.
    SetMode(Mode),
    /// Put both balances back to the starting value.
    ResetBalances,
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetBet(_) => "set_bet",
            Command::ToggleAccept(_) => "toggle_accept",
            Command::StartRound => "start_round",
            Command::AttemptMove(_) => "attempt_move",
            Command::PlayOpponent => "play_opponent",
            Command::Undo => "undo",
            Command::Cancel => "cancel",
            Command::NewGame => "new_game",
            Command::SetMode(_) => "set_mode",
            Command::ResetBalances => "reset_balances",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SetBet(amount) => write!(f, "{} {}", self.name(), amount),
            Command::ToggleAccept(seat) => write!(f, "{} {}", self.name(), seat),
            Command::AttemptMove(index) => write!(f, "{} {}", self.name(), index),
            Command::SetMode(mode) => write!(f, "{} {}", self.name(), mode),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Command::SetBet(100).to_string(), "set_bet 100");
        assert_eq!(Command::ToggleAccept(Seat::O).to_string(), "toggle_accept O");
        assert_eq!(Command::Undo.to_string(), "undo");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Command::AttemptMove(4)).unwrap();
        assert_eq!(json, r#"{"AttemptMove":4}"#);
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Command::AttemptMove(4));
    }
}
