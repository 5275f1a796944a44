//! Game state module - the turn/result state machine for one session
//!
//! One `GameState` instance owns one game session: the current turn phase,
//! both selected moves, the judged result, and the cumulative scoreboard.
//! Construct one per active session; there is no global instance, so
//! concurrent sessions (e.g. several terminals) stay independent.

use crate::outcome::{judge, Outcome};
use crate::scoring::ScoreBoard;
use crate::snapshot::RoundSnapshot;
use crate::types::{GameAction, Move, TurnPhase};

/// Complete state of one game session.
///
/// Invariants:
/// - `move_two` is `Some` only when `move_one` is already `Some`.
/// - `result` is `Some` if and only if the phase is `ShowingResult`, so
///   [`GameState::result_text`] is non-empty exactly while a result is shown.
#[derive(Debug, Clone)]
pub struct GameState {
    phase: TurnPhase,
    move_one: Option<Move>,
    move_two: Option<Move>,
    result: Option<Outcome>,
    score: ScoreBoard,
}

impl GameState {
    /// Create a fresh session awaiting player one.
    pub fn new() -> Self {
        Self {
            phase: TurnPhase::AwaitingPlayerOne,
            move_one: None,
            move_two: None,
            result: None,
            score: ScoreBoard::new(),
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn move_one(&self) -> Option<Move> {
        self.move_one
    }

    pub fn move_two(&self) -> Option<Move> {
        self.move_two
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.result
    }

    /// Result message; empty unless the result is being shown.
    pub fn result_text(&self) -> &'static str {
        self.result.map(|o| o.message()).unwrap_or("")
    }

    pub fn score(&self) -> ScoreBoard {
        self.score
    }

    /// Record a move for whichever player is up.
    ///
    /// While the result is on screen this is a no-op: the round is decided
    /// and only a reset leaves that phase. Returns whether state changed.
    pub fn select_move(&mut self, mv: Move) -> bool {
        match self.phase {
            TurnPhase::AwaitingPlayerOne => {
                self.move_one = Some(mv);
                self.phase = TurnPhase::AwaitingPlayerTwo;
                true
            }
            TurnPhase::AwaitingPlayerTwo => {
                let Some(first) = self.move_one else {
                    return false;
                };
                let outcome = judge(first, mv);
                self.move_two = Some(mv);
                self.result = Some(outcome);
                self.score.record(outcome);
                self.phase = TurnPhase::ShowingResult;
                true
            }
            TurnPhase::ShowingResult => false,
        }
    }

    /// Clear the round and return to player one. Scoreboard unchanged.
    pub fn reset_round(&mut self) {
        self.move_one = None;
        self.move_two = None;
        self.result = None;
        self.phase = TurnPhase::AwaitingPlayerOne;
    }

    /// Reset the round and zero the scoreboard.
    pub fn reset_game(&mut self) {
        self.reset_round();
        self.score.reset();
    }

    /// Apply a game action. Returns whether state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(mv) => self.select_move(mv),
            GameAction::ResetRound => {
                self.reset_round();
                true
            }
            GameAction::ResetGame => {
                self.reset_game();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.phase = self.phase;
        out.move_one = self.move_one;
        out.move_two = self.move_two;
        out.result_text = self.result_text();
        out.score = self.score;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
