//! GameView: maps a core [`RoundSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RoundSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Move, Player, TurnPhase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

// Interior rows of the card, top to bottom.
const ROW_TITLE: u16 = 0;
const ROW_SUBTITLE: u16 = 1;
const ROW_HEADING: u16 = 3;
const ROW_PROMPT: u16 = 4;
const ROW_MOVES: u16 = 6;
const ROW_MOVE_TAGS: u16 = 7;
const ROW_SCORE_TITLE: u16 = 9;
const ROW_SCORE_LABELS: u16 = 10;
const ROW_SCORE_VALUES: u16 = 11;
const ROW_HINTS: u16 = 13;
const INTERIOR_ROWS: u16 = 14;

/// A lightweight terminal view for the game: one centered card.
pub struct GameView {
    card_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for the move row and the three scoreboard columns.
        Self { card_w: 44 }
    }
}

impl GameView {
    pub fn card_size(&self) -> (u16, u16) {
        (self.card_w, INTERIOR_ROWS + 2)
    }

    /// Render the current snapshot into a framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (card_w, card_h) = self.card_size();
        let card_x = viewport.width.saturating_sub(card_w) / 2;
        let card_y = viewport.height.saturating_sub(card_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(&mut fb, card_x, card_y, card_w, card_h, border);

        // Interior origin and width.
        let x0 = card_x + 1;
        let y0 = card_y + 1;
        let w = card_w.saturating_sub(2);

        let title = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let faint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        fb.put_str_centered(x0, y0 + ROW_TITLE, w, "ROCK PAPER SCISSORS", title);
        fb.put_str_centered(x0, y0 + ROW_SUBTITLE, w, "two player game", faint);

        match snap.phase {
            TurnPhase::AwaitingPlayerOne | TurnPhase::AwaitingPlayerTwo => {
                self.draw_turn_prompt(&mut fb, snap, x0, y0, w);
            }
            TurnPhase::ShowingResult => {
                self.draw_result_panel(&mut fb, snap, x0, y0, w);
            }
        }

        self.draw_scoreboard(&mut fb, snap, x0, y0, w);
        self.draw_hints(&mut fb, snap, x0, y0, w);

        fb
    }

    fn draw_turn_prompt(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        x0: u16,
        y0: u16,
        w: u16,
    ) {
        let heading = match snap.phase.awaiting() {
            Some(Player::One) => "PLAYER 1'S TURN",
            Some(Player::Two) => "PLAYER 2'S TURN",
            None => return,
        };
        let bold = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let faint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        fb.put_str_centered(x0, y0 + ROW_HEADING, w, heading, bold);
        fb.put_str_centered(x0, y0 + ROW_PROMPT, w, "choose your move", faint);

        // "[R] Rock   [P] Paper   [S] Scissors", each choice in its color.
        // Player one's pick is never revealed here, so player two sees the
        // same neutral prompt.
        let total: u16 = Move::ALL
            .iter()
            .map(|mv| choice_text_width(*mv))
            .sum::<u16>()
            + 2 * CHOICE_GAP;
        let mut x = x0 + w.saturating_sub(total) / 2;
        for (i, mv) in Move::ALL.into_iter().enumerate() {
            if i > 0 {
                x += CHOICE_GAP;
            }
            fb.put_str(x, y0 + ROW_MOVES, key_hint(mv), faint);
            x += key_hint(mv).chars().count() as u16 + 1;
            fb.put_str(x, y0 + ROW_MOVES, move_label(mv), move_style(mv));
            x += move_label(mv).chars().count() as u16;
        }
    }

    fn draw_result_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        x0: u16,
        y0: u16,
        w: u16,
    ) {
        let message = CellStyle {
            fg: Rgb::new(240, 220, 120),
            bold: true,
            ..CellStyle::default()
        };
        let faint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        fb.put_str_centered(x0, y0 + ROW_HEADING, w, snap.result_text, message);

        // Both moves revealed side by side: left half / "vs" / right half.
        let half = w / 2 - 3;
        let mid = x0 + half;
        fb.put_str_centered(mid, y0 + ROW_MOVES, 6, "vs", faint);

        if let Some(mv) = snap.move_one {
            fb.put_str_centered(x0, y0 + ROW_MOVES, half, move_label(mv), move_style(mv));
        }
        if let Some(mv) = snap.move_two {
            fb.put_str_centered(mid + 6, y0 + ROW_MOVES, half, move_label(mv), move_style(mv));
        }
        fb.put_str_centered(x0, y0 + ROW_MOVE_TAGS, half, Player::One.label(), faint);
        fb.put_str_centered(mid + 6, y0 + ROW_MOVE_TAGS, half, Player::Two.label(), faint);
    }

    fn draw_scoreboard(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        x0: u16,
        y0: u16,
        w: u16,
    ) {
        let title = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let label = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        fb.put_str_centered(x0, y0 + ROW_SCORE_TITLE, w, "SCOREBOARD", title);

        let col_w = w / 3;
        let columns = [
            ("PLAYER 1", snap.score.player_one_wins),
            ("TIES", snap.score.ties),
            ("PLAYER 2", snap.score.player_two_wins),
        ];
        for (i, (name, count)) in columns.into_iter().enumerate() {
            let cx = x0 + col_w * i as u16;
            fb.put_str_centered(cx, y0 + ROW_SCORE_LABELS, col_w, name, label);
            fb.put_str_centered(cx, y0 + ROW_SCORE_VALUES, col_w, &count.to_string(), value);
        }
    }

    fn draw_hints(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, x0: u16, y0: u16, w: u16) {
        let faint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let hints = match snap.phase {
            TurnPhase::ShowingResult => "enter: play again   n: new game   q: quit",
            _ => "r/p/s or 1/2/3: pick   q: quit",
        };
        fb.put_str_centered(x0, y0 + ROW_HINTS, w, hints, faint);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

const CHOICE_GAP: u16 = 3;

fn choice_text_width(mv: Move) -> u16 {
    (key_hint(mv).chars().count() + 1 + move_label(mv).chars().count()) as u16
}

fn move_label(mv: Move) -> &'static str {
    match mv {
        Move::Rock => "Rock",
        Move::Paper => "Paper",
        Move::Scissors => "Scissors",
    }
}

fn key_hint(mv: Move) -> &'static str {
    match mv {
        Move::Rock => "[R]",
        Move::Paper => "[P]",
        Move::Scissors => "[S]",
    }
}

fn move_style(mv: Move) -> CellStyle {
    let fg = match mv {
        Move::Rock => Rgb::new(210, 150, 110),
        Move::Paper => Rgb::new(130, 180, 240),
        Move::Scissors => Rgb::new(230, 200, 100),
    };
    CellStyle {
        fg,
        ..CellStyle::default()
    }
}
