//! Events emitted by table commands.
//!
//! Commands return the events they caused, in order. The host renders
//! them; the session turns the loggable ones into history entries.

use super::round::Placement;
use super::rules::WinLine;
use super::session::Mode;
use super::types::Seat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bet was put on the table.
    BetSet {
        /// Stake per seat.
        amount: u64,
        /// Whether both balances cover it right now.
        covered: bool,
    },
    /// A seat accepted or withdrew acceptance.
    AcceptanceToggled {
        /// Seat that toggled.
        seat: Seat,
        /// New acceptance state.
        accepted: bool,
    },
    /// Stakes left both balances and a round began.
    RoundStarted {
        /// Stake per seat.
        stake: u64,
        /// Pot in play.
        pot: u64,
    },
    /// A mark was placed.
    MovePlayed(Placement),
    /// The seat to move is automated; the host should call the opponent
    /// step after `delay`.
    OpponentToMove {
        /// Seat the opponent plays.
        seat: Seat,
        /// Pause before the opponent's move is shown.
        delay: Duration,
    },
    /// A seat completed a line and took the pot.
    RoundWon {
        /// Winner.
        seat: Seat,
        /// Completed line.
        line: WinLine,
        /// Amount credited.
        payout: u64,
    },
    /// The board filled up; each seat got its stake back.
    RoundDrawn {
        /// Amount credited to each seat.
        refund: u64,
    },
    /// The last placement was taken back.
    MoveUndone(Placement),
    /// The table was reset to negotiation by a cancel.
    RoundCanceled {
        /// Amount returned to each seat (zero when no round was in play).
        refund: u64,
    },
    /// The board and bet were cleared for a new game.
    NewGame {
        /// Amount returned to each seat (zero when no round was in play).
        refund: u64,
    },
    /// Seat O changed hands.
    ModeChanged(Mode),
    /// Both balances went back to the starting value.
    BalancesReset {
        /// Starting balance.
        starting: u64,
    },
}

impl GameEvent {
    /// History line for this event, if it is logged.
    pub fn log_message(&self) -> Option<String> {
        let message = match self {
            GameEvent::BetSet { amount, .. } => format!("Bet set to {}.", amount),
            GameEvent::AcceptanceToggled {
                seat,
                accepted: true,
            } => format!("{} accepted the bet.", seat),
            GameEvent::AcceptanceToggled {
                seat,
                accepted: false,
            } => format!("{} withdrew acceptance.", seat),
            GameEvent::RoundStarted { stake, pot } => {
                format!("Round started - bet {} each. Pot {}.", stake, pot)
            }
            GameEvent::MovePlayed(placement) => placement.to_string(),
            GameEvent::OpponentToMove { .. } => return None,
            GameEvent::RoundWon { seat, payout, .. } => {
                format!("{} wins the round and takes the pot ({})", seat, payout)
            }
            GameEvent::RoundDrawn { .. } => "Round draw - bet returned.".to_string(),
            GameEvent::MoveUndone(_) => "Undo: last move removed.".to_string(),
            GameEvent::RoundCanceled { .. } => "Round canceled.".to_string(),
            GameEvent::NewGame { .. } => "New game (board cleared).".to_string(),
            GameEvent::ModeChanged(mode) => format!("Mode set to {}.", mode),
            GameEvent::BalancesReset { .. } => "Balances reset.".to_string(),
        };
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_messages() {
        let placed = GameEvent::MovePlayed(Placement::new(Position::BottomRight, Seat::X));
        assert_eq!(placed.log_message().as_deref(), Some("X placed at 9"));

        let started = GameEvent::RoundStarted { stake: 100, pot: 200 };
        assert_eq!(
            started.log_message().as_deref(),
            Some("Round started - bet 100 each. Pot 200.")
        );

        let cpu = GameEvent::ModeChanged(Mode::VsOpponent);
        assert_eq!(cpu.log_message().as_deref(), Some("Mode set to vs CPU."));
    }

    #[test]
    fn test_opponent_prompt_is_not_logged() {
        let prompt = GameEvent::OpponentToMove {
            seat: Seat::O,
            delay: Duration::from_millis(450),
        };
        assert_eq!(prompt.log_message(), None);
    }
}
