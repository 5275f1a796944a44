//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Move};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Move selection
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('1') => {
            Some(GameAction::Select(Move::Rock))
        }
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('2') => {
            Some(GameAction::Select(Move::Paper))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('3') => {
            Some(GameAction::Select(Move::Scissors))
        }

        // Play again (next round, score kept)
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::ResetRound),

        // New game (score zeroed)
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::ResetGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
