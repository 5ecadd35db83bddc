//! Wager table sessions.
//!
//! A [`GameSession`] owns everything one table needs: the round state, the
//! ledger, the history and the opponent strategy. Commands go through
//! [`GameSession::execute`], which validates against the current phase,
//! applies the change, logs it and returns the emitted events. A rejected
//! command leaves the session exactly as it was.

use super::action::Command;
use super::config::WagerConfig;
use super::contracts::{
    AutomatedToMove, BetInRange, BetOnTable, HumanToMove, LegalPlacement, StakeAgreed,
    assert_invariants,
};
use super::error::{MoveRejection, RoundError};
use super::event_log::{EventLog, EventRecord};
use super::events::GameEvent;
use super::ledger::Ledger;
use super::opponent::OpponentStrategy;
use super::position::Position;
use super::round::{ActiveRound, Negotiation, RoundState};
use super::rules::Outcome;
use super::store::Snapshot;
use super::types::{Board, Seat};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a table session.
pub type SessionId = String;

/// Who plays seat O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Mode {
    /// Two humans share the table.
    #[default]
    #[display("PvP")]
    PvP,
    /// Seat O is played by the opponent strategy.
    #[display("vs CPU")]
    VsOpponent,
}

impl Mode {
    /// Returns true if `seat` is played by the opponent strategy in this mode.
    pub fn is_automated(self, seat: Seat) -> bool {
        self == Mode::VsOpponent && seat == Seat::O
    }
}

/// One wager table.
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    mode: Mode,
    state: RoundState,
    ledger: Ledger,
    log: EventLog,
    starting_balance: u64,
    opponent_delay: Duration,
    opponent: Box<dyn OpponentStrategy>,
}

impl GameSession {
    /// Creates a session with starting balances and an empty history.
    #[instrument(skip(config, opponent), fields(opponent = opponent.name()))]
    pub fn new(id: SessionId, config: &WagerConfig, opponent: Box<dyn OpponentStrategy>) -> Self {
        Self::restore(id, config, None, opponent)
    }

    /// Creates a session from a stored snapshot, or from defaults without one.
    #[instrument(skip(config, snapshot, opponent), fields(restored = snapshot.is_some()))]
    pub fn restore(
        id: SessionId,
        config: &WagerConfig,
        snapshot: Option<Snapshot>,
        opponent: Box<dyn OpponentStrategy>,
    ) -> Self {
        let starting_balance = *config.starting_balance();
        let (ledger, log) = match snapshot {
            Some(snapshot) => {
                let (balances, history) = snapshot.dissolve();
                (balances, EventLog::from_messages(history))
            }
            None => (Ledger::new(starting_balance), EventLog::new()),
        };
        info!(
            session_id = %id,
            x = ledger.balance(Seat::X),
            o = ledger.balance(Seat::O),
            history = log.len(),
            "Creating game session"
        );
        Self {
            id,
            mode: Mode::default(),
            state: RoundState::fresh(),
            ledger,
            log,
            starting_balance,
            opponent_delay: config.opponent_delay(),
            opponent,
        }
    }

    /// Session ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Who plays seat O.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current phase.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Current balances.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Table history.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// The board, if a round is in play.
    pub fn board(&self) -> Option<&Board> {
        self.state.board()
    }

    /// Balance both seats return to on reset.
    pub fn starting_balance(&self) -> u64 {
        self.starting_balance
    }

    /// Name of the opponent strategy.
    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// The persisted part of the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.ledger, self.log.messages())
    }

    /// Owned read-only copy of everything a renderer needs.
    pub fn view(&self) -> SessionView {
        SessionView {
            mode: self.mode,
            state: self.state.clone(),
            ledger: self.ledger,
            history: self.log.newest_first().cloned().collect(),
            status: self.state.status_string(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Applies a command and returns the events it caused.
    ///
    /// On success the loggable events are appended to the history and the
    /// session invariants are checked. On failure nothing changes.
    #[instrument(skip(self), fields(session_id = %self.id, command = %command))]
    pub fn execute(&mut self, command: Command) -> Result<Vec<GameEvent>, RoundError> {
        #[cfg(debug_assertions)]
        let before = (self.state.clone(), self.ledger, self.log.len(), self.mode);

        let result = match command {
            Command::SetBet(amount) => self.handle_set_bet(amount),
            Command::ToggleAccept(seat) => self.handle_toggle_accept(seat),
            Command::StartRound => self.handle_start_round(),
            Command::AttemptMove(index) => self.handle_attempt_move(index),
            Command::PlayOpponent => self.handle_play_opponent(),
            Command::Undo => self.handle_undo(),
            Command::Cancel => self
                .abandon_round()
                .map(|refund| vec![GameEvent::RoundCanceled { refund }]),
            Command::NewGame => self
                .abandon_round()
                .map(|refund| vec![GameEvent::NewGame { refund }]),
            Command::SetMode(mode) => Ok(self.handle_set_mode(mode)),
            Command::ResetBalances => self.handle_reset_balances(),
        };

        match result {
            Ok(events) => {
                for message in events.iter().filter_map(GameEvent::log_message) {
                    self.log.append(message);
                }
                assert_invariants(self);
                info!(
                    events = events.len(),
                    status = %self.state.status_string(),
                    "Command applied"
                );
                Ok(events)
            }
            Err(e) => {
                #[cfg(debug_assertions)]
                debug_assert_eq!(
                    before,
                    (self.state.clone(), self.ledger, self.log.len(), self.mode),
                    "Rejected command changed session state"
                );
                warn!(error = %e, "Command rejected");
                Err(e)
            }
        }
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

    /// Lets the opponent strategy move for the automated seat.
    pub fn play_opponent(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::PlayOpponent)
    }

    /// Takes back the last placement.
    pub fn undo(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        self.execute(Command::Undo)
    }

    /// Abandons the round (refunding stakes) or the negotiation.
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

    // ─────────────────────────────────────────────────────────────
    //  Handlers
    // ─────────────────────────────────────────────────────────────

    fn negotiation_mut(&mut self) -> Result<&mut Negotiation, RoundError> {
        match &mut self.state {
            RoundState::Negotiating(negotiation) => Ok(negotiation),
            RoundState::Active(_) => Err(RoundError::RoundInProgress),
        }
    }

    fn handle_set_bet(&mut self, amount: u64) -> Result<Vec<GameEvent>, RoundError> {
        let covered = self.ledger.covers(amount);
        let negotiation = self.negotiation_mut()?;
        BetInRange::check(amount)?;
        negotiation.set_bet(amount);
        if !covered {
            warn!(amount, "Bet exceeds a balance; start will be refused until covered");
        }
        Ok(vec![GameEvent::BetSet { amount, covered }])
    }

    fn handle_toggle_accept(&mut self, seat: Seat) -> Result<Vec<GameEvent>, RoundError> {
        let negotiation = self.negotiation_mut()?;
        BetOnTable::check(negotiation)?;
        let accepted = negotiation.toggle(seat);
        Ok(vec![GameEvent::AcceptanceToggled { seat, accepted }])
    }

    fn handle_start_round(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        let negotiation = *self.negotiation_mut()?;
        StakeAgreed::check(&negotiation)?;
        let stake = *negotiation.bet();
        let pot = self.ledger.transfer_both_to_pot(stake)?;
        self.state = RoundState::Active(ActiveRound::start(stake, pot));
        Ok(vec![GameEvent::RoundStarted { stake, pot }])
    }

    fn handle_attempt_move(&mut self, index: usize) -> Result<Vec<GameEvent>, RoundError> {
        let RoundState::Active(round) = &self.state else {
            return Err(MoveRejection::RoundNotActive.into());
        };
        HumanToMove::check(self.mode, round)?;
        let position = LegalPlacement::check(round, index)?;
        self.apply_move(position)
    }

    fn handle_play_opponent(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        let RoundState::Active(round) = &self.state else {
            return Err(RoundError::NoActiveRound);
        };
        AutomatedToMove::check(self.mode, round)?;
        let seat = *round.turn();
        let choice = self
            .opponent
            .choose_move(round.board(), seat)
            .ok_or(MoveRejection::BoardFull)?;
        let position = LegalPlacement::check(round, choice.to_index())?;
        debug!(%seat, %position, opponent = self.opponent.name(), "Opponent move chosen");
        self.apply_move(position)
    }

    /// Places the current seat's mark and settles the round if it ended.
    ///
    /// Works on copies of the round and ledger, committed only once the
    /// payout succeeds.
    fn apply_move(&mut self, position: Position) -> Result<Vec<GameEvent>, RoundError> {
        let RoundState::Active(current) = &self.state else {
            return Err(MoveRejection::RoundNotActive.into());
        };
        let mut round = current.clone();
        let mut ledger = self.ledger;
        let pot = *round.pot();
        let refund = round.half_pot();
        let (placement, outcome) = round.place(position)?;
        debug!(board = %round.board().display(), ?outcome, "Board after move");

        let mut events = vec![GameEvent::MovePlayed(placement)];
        let next_state = match outcome {
            Outcome::Ongoing => {
                let next = *round.turn();
                if self.mode.is_automated(next) {
                    events.push(GameEvent::OpponentToMove {
                        seat: next,
                        delay: self.opponent_delay,
                    });
                }
                RoundState::Active(round)
            }
            Outcome::Win { seat, line } => {
                ledger.credit(seat, pot)?;
                info!(%seat, pot, "Round won");
                events.push(GameEvent::RoundWon {
                    seat,
                    line,
                    payout: pot,
                });
                RoundState::fresh()
            }
            Outcome::Draw => {
                ledger.credit_both(refund)?;
                info!(refund, "Round drawn");
                events.push(GameEvent::RoundDrawn { refund });
                RoundState::fresh()
            }
        };
        self.state = next_state;
        self.ledger = ledger;
        Ok(events)
    }

    fn handle_undo(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        let mode = self.mode;
        let delay = self.opponent_delay;
        let RoundState::Active(round) = &mut self.state else {
            return Err(RoundError::NoActiveRound);
        };
        let placement = round.undo()?;
        let mut events = vec![GameEvent::MoveUndone(placement)];
        if mode.is_automated(placement.seat) {
            events.push(GameEvent::OpponentToMove {
                seat: placement.seat,
                delay,
            });
        }
        Ok(events)
    }

    fn handle_set_mode(&mut self, mode: Mode) -> Vec<GameEvent> {
        self.mode = mode;
        let mut events = vec![GameEvent::ModeChanged(mode)];
        match &mut self.state {
            RoundState::Negotiating(negotiation) => negotiation.clear_acceptances(),
            RoundState::Active(round) => {
                let turn = *round.turn();
                if mode.is_automated(turn) {
                    events.push(GameEvent::OpponentToMove {
                        seat: turn,
                        delay: self.opponent_delay,
                    });
                }
            }
        }
        events
    }

    fn handle_reset_balances(&mut self) -> Result<Vec<GameEvent>, RoundError> {
        let starting = self.starting_balance;
        let mut ledger = self.ledger;
        ledger.reset_to_starting(starting);
        if let RoundState::Active(round) = &self.state {
            // The pot in play must stay payable to either seat.
            let mut settled = ledger;
            settled.credit_both(*round.pot())?;
        }
        self.ledger = ledger;
        Ok(vec![GameEvent::BalancesReset { starting }])
    }

    /// Returns to a fresh negotiation, refunding each seat's stake if a round
    /// was in play. Returns the per-seat refund.
    fn abandon_round(&mut self) -> Result<u64, RoundError> {
        let refund = match &self.state {
            RoundState::Active(round) => round.half_pot(),
            RoundState::Negotiating(_) => 0,
        };
        if refund > 0 {
            self.ledger.credit_both(refund)?;
            info!(refund, "Stakes refunded");
        }
        self.state = RoundState::fresh();
        Ok(refund)
    }
}

/// Owned copy of a session's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SessionView {
    mode: Mode,
    state: RoundState,
    ledger: Ledger,
    history: Vec<EventRecord>,
    status: String,
}

// ─────────────────────────────────────────────────────────────
//  Session registry
// ─────────────────────────────────────────────────────────────

/// Failure looking up or running a command on a managed session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// A session with this ID already exists.
    #[display("Session already exists: {}", _0)]
    AlreadyExists(#[error(not(source))] SessionId),
    /// No session with this ID.
    #[display("Session not found: {}", _0)]
    NotFound(#[error(not(source))] SessionId),
    /// Another thread panicked while holding the registry lock.
    #[display("Session registry lock poisoned")]
    LockPoisoned,
    /// The session rejected the command.
    #[display("{}", _0)]
    #[from]
    Round(RoundError),
}

/// Manages all table sessions.
///
/// Each command runs while holding the registry lock, so one table's round
/// state and ledger are never touched by two threads at once.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, GameSession>>, SessionError> {
        self.sessions.lock().map_err(|_| {
            warn!("Session registry lock poisoned");
            SessionError::LockPoisoned
        })
    }

    /// Creates a new session with starting balances.
    #[instrument(skip(self, config, opponent))]
    pub fn create_session(
        &self,
        id: SessionId,
        config: &WagerConfig,
        opponent: Box<dyn OpponentStrategy>,
    ) -> Result<SessionId, SessionError> {
        self.insert_session(GameSession::new(id, config, opponent))
    }

    /// Registers an existing session.
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub fn insert_session(&self, session: GameSession) -> Result<SessionId, SessionError> {
        let mut sessions = self.lock()?;
        if sessions.contains_key(&session.id) {
            warn!("Session already exists");
            return Err(SessionError::AlreadyExists(session.id));
        }
        let id = session.id.clone();
        sessions.insert(id.clone(), session);
        info!("Registered session");
        Ok(id)
    }

    /// Runs `f` on a session while holding the registry lock.
    #[instrument(skip(self, f))]
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.lock()?;
        let session = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })?;
        Ok(f(session))
    }

    /// Executes a command on a session.
    #[instrument(skip(self))]
    pub fn execute(&self, id: &str, command: Command) -> Result<Vec<GameEvent>, SessionError> {
        self.with_session(id, |session| session.execute(command))?
            .map_err(SessionError::from)
    }

    /// Read-only view of a session.
    #[instrument(skip(self))]
    pub fn view(&self, id: &str) -> Result<SessionView, SessionError> {
        self.with_session(id, |session| session.view())
    }

    /// Lists all session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let ids: Vec<_> = self.lock()?.keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }

    /// Removes a session and hands it back.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<GameSession, SessionError> {
        let session = self
            .lock()?
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        info!("Removed session");
        Ok(session)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::FirstEmptyOpponent;

    fn session() -> GameSession {
        GameSession::new(
            "t".to_string(),
            &WagerConfig::default().with_opponent_delay_ms(0),
            Box::new(FirstEmptyOpponent::new("first")),
        )
    }

    fn active(bet: u64) -> GameSession {
        let mut s = session();
        s.set_bet(bet).unwrap();
        s.toggle_accept(Seat::X).unwrap();
        s.toggle_accept(Seat::O).unwrap();
        s.start_round().unwrap();
        s
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::PvP.to_string(), "PvP");
        assert_eq!(Mode::VsOpponent.to_string(), "vs CPU");
        assert!(Mode::VsOpponent.is_automated(Seat::O));
        assert!(!Mode::VsOpponent.is_automated(Seat::X));
        assert!(!Mode::PvP.is_automated(Seat::O));
    }

    #[test]
    fn test_set_bet_clears_acceptances() {
        let mut s = session();
        s.set_bet(50).unwrap();
        s.toggle_accept(Seat::X).unwrap();
        s.set_bet(60).unwrap();
        let RoundState::Negotiating(n) = s.state() else {
            panic!("expected negotiation");
        };
        assert_eq!(*n.bet(), 60);
        assert!(!n.accepted(Seat::X));
    }

    #[test]
    fn test_uncovered_bet_is_flagged() {
        let mut s = session();
        let events = s.set_bet(5000).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::BetSet {
                amount: 5000,
                covered: false
            }]
        );
    }

    #[test]
    fn test_zero_bet_rejected() {
        let mut s = session();
        assert_eq!(s.set_bet(0), Err(RoundError::InvalidBet { amount: 0 }));
        assert!(s.log().is_empty());
    }

    #[test]
    fn test_accept_without_bet() {
        let mut s = session();
        assert_eq!(s.toggle_accept(Seat::X), Err(RoundError::NoBetSet));
    }

    #[test]
    fn test_negotiation_commands_rejected_mid_round() {
        let mut s = active(10);
        assert_eq!(s.set_bet(20), Err(RoundError::RoundInProgress));
        assert_eq!(s.toggle_accept(Seat::X), Err(RoundError::RoundInProgress));
        assert_eq!(s.start_round(), Err(RoundError::RoundInProgress));
    }

    #[test]
    fn test_start_moves_stakes_into_pot() {
        let s = active(100);
        assert_eq!(s.ledger().balance(Seat::X), 900);
        assert_eq!(s.ledger().balance(Seat::O), 900);
        let RoundState::Active(round) = s.state() else {
            panic!("expected active round");
        };
        assert_eq!(*round.pot(), 200);
        assert_eq!(*round.turn(), Seat::X);
    }

    #[test]
    fn test_undo_twice_fails() {
        let mut s = active(10);
        s.attempt_move(4).unwrap();
        s.undo().unwrap();
        assert_eq!(s.undo(), Err(RoundError::NoMoveToUndo));
        assert_eq!(s.state().turn(), Some(Seat::X));
        assert!(s.board().unwrap().is_empty(Position::Center));
    }

    #[test]
    fn test_undo_while_negotiating() {
        let mut s = session();
        assert_eq!(s.undo(), Err(RoundError::NoActiveRound));
    }

    #[test]
    fn test_opponent_prompt_after_human_move() {
        let mut s = active(10);
        s.set_mode(Mode::VsOpponent).unwrap();
        let events = s.attempt_move(0).unwrap();
        assert!(matches!(
            events.last(),
            Some(GameEvent::OpponentToMove { seat: Seat::O, .. })
        ));
        assert_eq!(s.attempt_move(1), Err(RoundError::NotYourTurn(Seat::O)));

        let events = s.play_opponent().unwrap();
        assert_eq!(
            events,
            vec![GameEvent::MovePlayed(crate::round::Placement::new(
                Position::TopCenter,
                Seat::O
            ))]
        );
        assert_eq!(s.play_opponent(), Err(RoundError::OpponentNotToMove(Seat::X)));
    }

    #[test]
    fn test_set_mode_mid_round_on_opponent_turn_prompts() {
        let mut s = active(10);
        s.attempt_move(0).unwrap();
        let events = s.set_mode(Mode::VsOpponent).unwrap();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::ModeChanged(Mode::VsOpponent), GameEvent::OpponentToMove { .. }]
        ));
    }

    #[test]
    fn test_reset_balances_any_state() {
        let mut s = active(300);
        s.reset_balances().unwrap();
        assert_eq!(*s.ledger(), Ledger::new(1000));
        assert!(s.state().is_active());
        assert_eq!(s.log().messages().last().map(String::as_str), Some("Balances reset."));
    }

    #[test]
    fn test_view_is_newest_first() {
        let mut s = session();
        s.set_bet(10).unwrap();
        s.toggle_accept(Seat::X).unwrap();
        let view = s.view();
        assert_eq!(view.history()[0].message(), "X accepted the bet.");
        assert_eq!(view.history()[1].message(), "Bet set to 10.");
        assert_eq!(view.status(), "Current bet: 10 - X accepted, O not accepted.");
    }

    #[test]
    fn test_restore_uses_snapshot() {
        let snapshot = Snapshot::new(Ledger::with_balances(1200, 800), vec!["old".into()]);
        let s = GameSession::restore(
            "r".into(),
            &WagerConfig::default(),
            Some(snapshot.clone()),
            Box::new(FirstEmptyOpponent::new("first")),
        );
        assert_eq!(s.snapshot(), snapshot);
        assert!(!s.state().is_active());
    }

    #[test]
    fn test_manager_rejects_duplicates_and_unknown_ids() {
        let manager = SessionManager::new();
        let config = WagerConfig::default();
        manager
            .create_session("a".into(), &config, Box::new(FirstEmptyOpponent::new("f")))
            .unwrap();
        assert_eq!(
            manager.create_session("a".into(), &config, Box::new(FirstEmptyOpponent::new("f"))),
            Err(SessionError::AlreadyExists("a".into()))
        );
        assert_eq!(
            manager.execute("b", Command::Cancel).unwrap_err(),
            SessionError::NotFound("b".into())
        );
        assert_eq!(
            manager.execute("a", Command::StartRound).unwrap_err(),
            SessionError::Round(RoundError::InvalidBet { amount: 0 })
        );
    }
}
