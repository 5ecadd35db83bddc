//! Errors returned by table commands.
//!
//! Every variant is recoverable: a command that fails leaves the session
//! exactly as it was before the call.

use super::ledger::LedgerError;
use super::position::Position;
use super::types::Seat;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// Cell index outside 0-8.
    #[display("cell {} is off the board", _0)]
    OutOfRange(usize),

    /// Cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// No round is being played.
    #[display("no round is in play")]
    RoundNotActive,

    /// No empty cell is left to choose.
    #[display("the board is full")]
    BoardFull,
}

impl std::error::Error for MoveRejection {}

/// Error from a table command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// Bet must be positive and small enough to double into a pot.
    #[display("Invalid bet: {}", amount)]
    InvalidBet {
        /// Rejected amount.
        amount: u64,
    },

    /// Acceptance requires a bet on the table.
    #[display("Set a bet first")]
    NoBetSet,

    /// Both seats must accept before the round starts.
    #[display("Both players must accept the bet to start")]
    BetNotAccepted,

    /// A seat cannot cover the stake.
    #[display("{} lacks the balance for this bet ({} < {})", seat, balance, required)]
    InsufficientFunds {
        /// Seat that fell short.
        seat: Seat,
        /// Its balance.
        balance: u64,
        /// Stake required.
        required: u64,
    },

    /// The seat to move is played by the opponent strategy.
    #[display("It's {}'s turn and that seat is automated", _0)]
    NotYourTurn(Seat),

    /// The placement was refused.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveRejection),

    /// Nothing to undo (only the last move can be undone, once).
    #[display("No move to undo")]
    NoMoveToUndo,

    /// The command needs a round in play.
    #[display("No active round")]
    NoActiveRound,

    /// The command is only valid between rounds.
    #[display("A round is already in progress")]
    RoundInProgress,

    /// A payout or refund would not fit in a balance.
    #[display("{} cannot hold {} more ({})", seat, amount, balance)]
    BalanceOverflow {
        /// Seat that would overflow.
        seat: Seat,
        /// Its balance.
        balance: u64,
        /// Amount it would be credited.
        amount: u64,
    },

    /// The opponent was asked to move on a human seat's turn.
    #[display("It's {}'s turn, not the opponent's", _0)]
    OpponentNotToMove(Seat),
}

impl std::error::Error for RoundError {}

impl From<MoveRejection> for RoundError {
    fn from(rejection: MoveRejection) -> Self {
        RoundError::InvalidMove(rejection)
    }
}

impl From<LedgerError> for RoundError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds {
                seat,
                balance,
                required,
            } => RoundError::InsufficientFunds {
                seat,
                balance,
                required,
            },
            LedgerError::PotOverflow { amount } | LedgerError::PayoutOverflow { amount, .. } => {
                RoundError::InvalidBet { amount }
            }
            LedgerError::BalanceOverflow {
                seat,
                balance,
                amount,
            } => RoundError::BalanceOverflow {
                seat,
                balance,
                amount,
            },
        }
    }
}
