//! Terminal Rock-Paper-Scissors runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The game has no
//! timers, so the loop blocks on the next terminal event instead of ticking.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_roshambo::core::{GameState, RoundSnapshot};
use tui_roshambo::input::{handle_key_event, should_quit};
use tui_roshambo::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = GameView::default();
    let mut snap = RoundSnapshot::default();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        // Block until the next event; every state change is key-driven.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
