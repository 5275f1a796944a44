use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_roshambo::core::{judge, GameState, RoundSnapshot};
use tui_roshambo::types::{GameAction, Move};

fn bench_judge(c: &mut Criterion) {
    c.bench_function("judge_full_table", |b| {
        b.iter(|| {
            for a in Move::ALL {
                for m in Move::ALL {
                    black_box(judge(black_box(a), black_box(m)));
                }
            }
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("round_select_select_reset", |b| {
        let mut game = GameState::new();
        b.iter(|| {
            game.apply_action(GameAction::Select(black_box(Move::Rock)));
            game.apply_action(GameAction::Select(black_box(Move::Scissors)));
            game.apply_action(GameAction::ResetRound);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameState::new();
    game.apply_action(GameAction::Select(Move::Paper));
    game.apply_action(GameAction::Select(Move::Rock));
    let mut snap = RoundSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(benches, bench_judge, bench_full_round, bench_snapshot);
criterion_main!(benches);
