//! TUI Roshambo (workspace facade crate).
//!
//! This package keeps a stable `tui_roshambo::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_roshambo_core as core;
pub use tui_roshambo_input as input;
pub use tui_roshambo_term as term;
pub use tui_roshambo_types as types;
