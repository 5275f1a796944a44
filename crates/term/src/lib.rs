//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game view draws into a plain
//! framebuffer of styled character cells, and the renderer flushes that
//! framebuffer to the terminal with diff-based redraws.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure (snapshot in, framebuffer out) so layout can be
//!   asserted in tests without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_roshambo_core as core;
pub use tui_roshambo_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
