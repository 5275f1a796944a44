use tui_roshambo::core::{GameState, RoundSnapshot};
use tui_roshambo::term::{FrameBuffer, GameView, Viewport};
use tui_roshambo::types::{GameAction, Move, TurnPhase};

fn fb_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new().snapshot();
    let view = GameView::default();

    let (card_w, card_h) = view.card_size();
    // Viewport exactly the card size puts the corners at the edges.
    let fb = view.render(&snap, Viewport::new(card_w, card_h));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(card_w - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, card_h - 1).unwrap().ch, '└');
    assert_eq!(fb.get(card_w - 1, card_h - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_turn_prompt_for_player_one() {
    let snap = GameState::new().snapshot();
    let view = GameView::default();

    let fb = view.render(&snap, Viewport::new(80, 24));
    let text = fb_text(&fb);

    assert!(text.contains("ROCK PAPER SCISSORS"));
    assert!(text.contains("PLAYER 1'S TURN"));
    assert!(text.contains("choose your move"));
    assert!(text.contains("[R] Rock"));
    assert!(text.contains("[P] Paper"));
    assert!(text.contains("[S] Scissors"));
}

#[test]
fn term_view_shows_turn_prompt_for_player_two() {
    let mut game = GameState::new();
    game.apply_action(GameAction::Select(Move::Rock));

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
    let text = fb_text(&fb);

    assert!(text.contains("PLAYER 2'S TURN"));
    assert!(!text.contains("Wins!"));
}

#[test]
fn term_view_does_not_leak_player_one_move() {
    // During player two's turn the frame must not depend on what player one
    // picked; otherwise the shared screen gives the pick away.
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let mut a = GameState::new();
    a.apply_action(GameAction::Select(Move::Rock));
    let mut b = GameState::new();
    b.apply_action(GameAction::Select(Move::Scissors));

    let fb_a = view.render(&a.snapshot(), vp);
    let fb_b = view.render(&b.snapshot(), vp);
    assert_eq!(fb_a, fb_b);
}

#[test]
fn term_view_renders_result_panel() {
    let mut game = GameState::new();
    game.apply_action(GameAction::Select(Move::Rock));
    game.apply_action(GameAction::Select(Move::Scissors));
    assert_eq!(game.phase(), TurnPhase::ShowingResult);

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
    let text = fb_text(&fb);

    assert!(text.contains("Player 1 Wins!"));
    assert!(text.contains("Rock"));
    assert!(text.contains("Scissors"));
    assert!(text.contains("vs"));
    assert!(text.contains("play again"));
    assert!(text.contains("new game"));
}

#[test]
fn term_view_renders_scoreboard_counts() {
    let mut game = GameState::new();
    game.apply_action(GameAction::Select(Move::Paper));
    game.apply_action(GameAction::Select(Move::Paper));

    let mut snap = game.snapshot();
    snap.score.player_one_wins = 12;
    snap.score.player_two_wins = 7;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let text = fb_text(&fb);

    assert!(text.contains("SCOREBOARD"));
    assert!(text.contains("PLAYER 1"));
    assert!(text.contains("TIES"));
    assert!(text.contains("PLAYER 2"));
    assert!(text.contains("12"));
    assert!(text.contains('7'));
    assert!(text.contains('1')); // the tie just played
}

#[test]
fn term_view_centers_card_in_large_viewports() {
    let view = GameView::default();
    let (card_w, card_h) = view.card_size();

    let vp = Viewport::new(card_w + 20, card_h + 10);
    let fb = view.render(&RoundSnapshot::default(), vp);

    // Top-left corner lands at the centering offset.
    assert_eq!(fb.get(10, 5).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_tiny_viewports() {
    let view = GameView::default();
    // Smaller than the card in both dimensions; content is clipped, not
    // panicked on.
    let fb = view.render(&RoundSnapshot::default(), Viewport::new(10, 4));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 4);
}
