//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same action sequence produces identical state
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: the turn/result state machine for one game session
//! - [`outcome`]: win determination over the full move table
//! - [`scoring`]: cumulative win/tie counters across rounds
//! - [`snapshot`]: read-only state view consumed by the rendering layer
//!
//! # Game Rules
//!
//! Two players share one device. Player one picks a move, then player two;
//! the outcome is judged and shown, and the scoreboard updates. A round reset
//! keeps the score; a game reset zeroes it. Selecting a move while the result
//! is on screen does nothing.
//!
//! # Example
//!
//! ```
//! use tui_roshambo_core::GameState;
//! use tui_roshambo_types::{GameAction, Move, TurnPhase};
//!
//! let mut game = GameState::new();
//! game.apply_action(GameAction::Select(Move::Rock));
//! game.apply_action(GameAction::Select(Move::Scissors));
//!
//! assert_eq!(game.phase(), TurnPhase::ShowingResult);
//! assert_eq!(game.result_text(), "Player 1 Wins!");
//! assert_eq!(game.score().player_one_wins, 1);
//! ```

pub mod game_state;
pub mod outcome;
pub mod scoring;
pub mod snapshot;

pub use tui_roshambo_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use outcome::{judge, Outcome};
pub use scoring::ScoreBoard;
pub use snapshot::RoundSnapshot;
