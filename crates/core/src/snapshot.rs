//! Read-only state view consumed by the rendering layer.

use crate::scoring::ScoreBoard;
use crate::types::{Move, TurnPhase};

/// Everything the renderer needs to draw one frame.
///
/// Produced by [`crate::GameState::snapshot_into`] after each applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub phase: TurnPhase,
    pub move_one: Option<Move>,
    pub move_two: Option<Move>,
    /// Result message; empty unless `phase` is `ShowingResult`.
    pub result_text: &'static str,
    pub score: ScoreBoard,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.phase = TurnPhase::AwaitingPlayerOne;
        self.move_one = None;
        self.move_two = None;
        self.result_text = "";
        self.score = ScoreBoard::default();
    }

    /// Whether a move selection would currently be accepted.
    pub fn awaiting_input(&self) -> bool {
        self.phase.awaiting().is_some()
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        let mut s = Self {
            phase: TurnPhase::AwaitingPlayerOne,
            move_one: None,
            move_two: None,
            result_text: "",
            score: ScoreBoard::default(),
        };
        s.clear();
        s
    }
}
