//! Terminal input module.
//!
//! Maps `crossterm` key events into [`tui_roshambo_types::GameAction`]s. The
//! mapping is stateless: out-of-phase actions are forwarded as-is and the
//! core treats them as no-ops, so the map never needs to know whose turn it
//! is.

pub mod map;

pub use tui_roshambo_types as types;

pub use map::{handle_key_event, should_quit};
