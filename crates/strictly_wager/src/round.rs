//! Round phases.
//!
//! A table is either negotiating a bet or playing a round. Each phase is
//! its own type carrying only the fields that make sense for it: an
//! [`ActiveRound`] always has a board and a pot, a [`Negotiation`] never
//! does. Settlement is a transition, not a phase.

use super::error::{MoveRejection, RoundError};
use super::position::Position;
use super::rules::Outcome;
use super::types::{Board, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A mark placed by a seat. Kept as the single-slot undo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Cell that received the mark.
    pub position: Position,
    /// Seat that placed it.
    pub seat: Seat,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} placed at {}", self.seat, self.position.key())
    }
}

// ─────────────────────────────────────────────────────────────
//  Negotiating Phase
// ─────────────────────────────────────────────────────────────

/// Bet negotiation between rounds.
///
/// A zero bet means no bet is on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Negotiation {
    bet: u64,
    accepted_x: bool,
    accepted_o: bool,
}

impl Negotiation {
    /// Fresh negotiation: no bet, no acceptances.
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Whether a seat has accepted the current bet.
    pub fn accepted(&self, seat: Seat) -> bool {
        match seat {
            Seat::X => self.accepted_x,
            Seat::O => self.accepted_o,
        }
    }

    /// Whether both seats accepted.
    pub fn both_accepted(&self) -> bool {
        self.accepted_x && self.accepted_o
    }

    /// Puts a new bet on the table; acceptances start over.
    pub(crate) fn set_bet(&mut self, amount: u64) {
        self.bet = amount;
        self.clear_acceptances();
    }

    /// Flips a seat's acceptance and returns the new value.
    pub(crate) fn toggle(&mut self, seat: Seat) -> bool {
        let flag = match seat {
            Seat::X => &mut self.accepted_x,
            Seat::O => &mut self.accepted_o,
        };
        *flag = !*flag;
        *flag
    }

    /// Withdraws both acceptances, keeping the bet.
    pub(crate) fn clear_acceptances(&mut self) {
        self.accepted_x = false;
        self.accepted_o = false;
    }
}

// ─────────────────────────────────────────────────────────────
//  Active Phase
// ─────────────────────────────────────────────────────────────

/// A round in play.
///
/// The pot is fixed when the round starts; settlement pays out of it and
/// never looks at the negotiated bet again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ActiveRound {
    board: Board,
    turn: Seat,
    stake: u64,
    pot: u64,
    last_move: Option<Placement>,
}

impl ActiveRound {
    /// Starts a round on an empty board with X to move.
    #[instrument]
    pub(crate) fn start(stake: u64, pot: u64) -> Self {
        Self {
            board: Board::new(),
            turn: Seat::X,
            stake,
            pot,
            last_move: None,
        }
    }

    /// Places the current seat's mark and evaluates the board.
    ///
    /// On `Ongoing` the turn passes to the other seat. On a terminal
    /// outcome the turn is left as is; the round is about to be settled.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection::Occupied`] and leaves the round untouched if
    /// the cell is taken.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub(crate) fn place(
        &mut self,
        position: Position,
    ) -> Result<(Placement, Outcome), MoveRejection> {
        let seat = self.turn;
        self.board.place(position, seat)?;

        let placement = Placement::new(position, seat);
        self.last_move = Some(placement);

        let outcome = self.board.evaluate();
        if outcome == Outcome::Ongoing {
            self.turn = seat.opponent();
        }
        debug!(?placement, ?outcome, "Mark placed");
        Ok((placement, outcome))
    }

    /// Takes back the last placement and hands the turn back to its seat.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoMoveToUndo`] if there is no last move, which
    /// includes a second undo without a move in between.
    #[instrument(skip(self))]
    pub(crate) fn undo(&mut self) -> Result<Placement, RoundError> {
        let placement = self.last_move.take().ok_or(RoundError::NoMoveToUndo)?;
        self.board.clear(placement.position);
        self.turn = placement.seat;
        debug!(?placement, "Placement undone");
        Ok(placement)
    }

    /// Share of the pot each seat gets back on a draw or refund.
    pub fn half_pot(&self) -> u64 {
        self.pot / 2
    }

    #[cfg(test)]
    pub(crate) fn board_mut_for_tests(&mut self) -> &mut Board {
        &mut self.board
    }
}

// ─────────────────────────────────────────────────────────────
//  State wrapper
// ─────────────────────────────────────────────────────────────

/// Current phase of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Between rounds, agreeing on a bet.
    Negotiating(Negotiation),
    /// Round in play.
    Active(ActiveRound),
}

impl RoundState {
    /// Fresh negotiation with no bet.
    pub fn fresh() -> Self {
        RoundState::Negotiating(Negotiation::fresh())
    }

    /// Returns true while a round is in play.
    pub fn is_active(&self) -> bool {
        matches!(self, RoundState::Active(_))
    }

    /// The board, if a round is in play.
    pub fn board(&self) -> Option<&Board> {
        match self {
            RoundState::Active(round) => Some(round.board()),
            RoundState::Negotiating(_) => None,
        }
    }

    /// Seat to move, if a round is in play.
    pub fn turn(&self) -> Option<Seat> {
        match self {
            RoundState::Active(round) => Some(*round.turn()),
            RoundState::Negotiating(_) => None,
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            RoundState::Negotiating(n) if *n.bet() == 0 => {
                "Waiting to start - set bet and both players accept.".to_string()
            }
            RoundState::Negotiating(n) => format!(
                "Current bet: {} - X {}, O {}.",
                n.bet(),
                acceptance_label(n.accepted_x),
                acceptance_label(n.accepted_o),
            ),
            RoundState::Active(round) => {
                format!("Turn: {}. Pot {}.", round.turn, round.pot)
            }
        }
    }
}

fn acceptance_label(accepted: bool) -> &'static str {
    if accepted { "accepted" } else { "not accepted" }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::fresh()
    }
}
