//! A session bound to a snapshot store.

use super::action::Command;
use super::config::WagerConfig;
use super::error::RoundError;
use super::events::GameEvent;
use super::opponent::OpponentStrategy;
use super::session::{GameSession, Mode, SessionView};
use super::store::{SnapshotStore, StoreError};
use super::types::Seat;
use tracing::{info, instrument, warn};

/// Hosts one [`GameSession`] and keeps its balances and history stored.
///
/// The snapshot is loaded once on open. Every successful command is
/// followed by a save; a rejected command changes nothing, so nothing is
/// saved. Storage problems are logged and never surface as game errors.
#[derive(Debug)]
pub struct PersistentTable<S: SnapshotStore> {
    session: GameSession,
    store: S,
}

impl<S: SnapshotStore> PersistentTable<S> {
    /// Opens a table, restoring balances and history from `store`.
    #[instrument(skip_all, fields(storage_key = %config.storage_key()))]
    pub fn open(config: &WagerConfig, store: S, opponent: Box<dyn OpponentStrategy>) -> Self {
        let snapshot = match store.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Failed to load snapshot, using defaults");
                None
            }
        };
        let session =
            GameSession::restore(config.storage_key().clone(), config, snapshot, opponent);
        info!("Table opened");
        Self { session, store }
    }

    /// The hosted session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Read-only view of the session.
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs a command and saves on success.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<Vec<GameEvent>, RoundError> {
        let events = self.session.execute(command)?;
        self.save();
        Ok(events)
    }

    /// Stores the current snapshot. Failures are logged only.
    #[instrument(skip(self))]
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            warn!(error = %e, "Failed to save snapshot");
        }
    }

    /// Stores the current snapshot, reporting failures.
    pub fn try_save(&self) -> Result<(), StoreError> {
        self.store.save(&self.session.snapshot())
    }

    /// Puts a bet on the table.
    pub fn set_bet(&mut self, amount: u64) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::SetBet(amount))
    }

    /// Flips a seat's acceptance of the bet.
    pub fn toggle_accept(&mut self, seat: Seat) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::ToggleAccept(seat))
    }

    /// Moves both stakes into the pot and starts play.
    pub fn start_round(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::StartRound)
    }

    /// Places the human seat's mark at a cell index.
    pub fn attempt_move(&mut self, index: usize) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::AttemptMove(index))
    }

    /// Lets the opponent strategy move.
    pub fn play_opponent(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::PlayOpponent)
    }

    /// Takes back the last placement.
    pub fn undo(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::Undo)
    }

    /// Abandons the round or negotiation.
    pub fn cancel(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::Cancel)
    }

    /// Clears the board and bet.
    pub fn new_game(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::NewGame)
    }

    /// Changes who plays seat O.
    pub fn set_mode(&mut self, mode: Mode) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::SetMode(mode))
    }

    /// Puts both balances back to the starting value.
    pub fn reset_balances(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::ResetBalances)
    }
}
