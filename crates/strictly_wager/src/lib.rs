//! Strictly Wager - a tic-tac-toe table with a betting round
//!
//! Two seats, X and O, agree on a bet, both accept, and play a round of
//! tic-tac-toe for the pot. Balances and history survive between sessions
//! through a pluggable snapshot store.
//!
//! # Architecture
//!
//! - **Board**: cells, positions and win/draw evaluation
//! - **Ledger**: the two balances, with an all-or-nothing pot transfer
//! - **Session**: the round state machine (negotiation, play, settlement)
//! - **Opponent**: pluggable move choice for seat O in vs-CPU mode
//! - **Store**: snapshot persistence (memory, JSON file, SQLite)
//! - **Table**: a session bound to a store, saving after each command
//!
//! # Example
//!
//! ```
//! use strictly_wager::{
//!     FirstEmptyOpponent, GameEvent, MemoryStore, PersistentTable, Seat, WagerConfig,
//! };
//!
//! let config = WagerConfig::default();
//! let opponent = Box::new(FirstEmptyOpponent::new("CPU"));
//! let mut table = PersistentTable::open(&config, MemoryStore::new(), opponent);
//!
//! table.set_bet(100)?;
//! table.toggle_accept(Seat::X)?;
//! table.toggle_accept(Seat::O)?;
//! table.start_round()?;
//! for index in [0, 4, 1, 3] {
//!     table.attempt_move(index)?;
//! }
//! let events = table.attempt_move(2)?;
//! assert!(matches!(events.last(), Some(GameEvent::RoundWon { seat: Seat::X, .. })));
//! assert_eq!(table.session().ledger().balance(Seat::X), 1100);
//! # Ok::<(), strictly_wager::RoundError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod contracts;
mod error;
mod event_log;
mod events;
mod invariants;
mod ledger;
mod opponent;
mod position;
mod round;
mod rules;
mod session;
mod store;
mod table;
mod types;

// Crate-level exports - Board
pub use position::Position;
pub use rules::{LINES, Outcome, WinLine, evaluate, find_winning_line, is_full};
pub use types::{Board, Cell, Seat};

// Crate-level exports - Ledger
pub use ledger::{Ledger, LedgerError};

// Crate-level exports - Round state machine
pub use action::Command;
pub use contracts::{
    AutomatedToMove, BetInRange, BetOnTable, HumanToMove, LegalPlacement, MAX_BET, StakeAgreed,
};
pub use error::{MoveRejection, RoundError};
pub use events::GameEvent;
pub use invariants::{
    BetBeforeAcceptanceInvariant, Invariant, InvariantSet, InvariantViolation,
    MarksAlternateInvariant, PotMatchesStakeInvariant, SessionInvariants,
};
pub use round::{ActiveRound, Negotiation, Placement, RoundState};
pub use session::{GameSession, Mode, SessionError, SessionId, SessionManager, SessionView};

// Crate-level exports - History
pub use event_log::{EventLog, EventRecord};

// Crate-level exports - Opponent
pub use opponent::{FirstEmptyOpponent, OpponentStrategy, RandomOpponent};

// Crate-level exports - Configuration
pub use config::{
    ConfigError, ENV_OPPONENT_DELAY_MS, ENV_OPPONENT_SEED, ENV_STARTING_BALANCE,
    ENV_STORAGE_KEY, WagerConfig,
};

// Crate-level exports - Persistence
pub use store::{
    JsonFileStore, MemoryStore, NewStoredSnapshot, Snapshot, SnapshotStore, SqliteStore,
    StoreError, StoredSnapshot,
};
pub use table::PersistentTable;
