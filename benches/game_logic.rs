use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, EngineConfig, GameState};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::init(EngineConfig::default(), 12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::init(EngineConfig::default(), 12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            black_box(state.hard_drop());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::init(EngineConfig::default(), 12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(black_box(1), 0);
            state.try_move(black_box(-1), 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::init(EngineConfig::default(), 12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::Rotate));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::init(EngineConfig::default(), 12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
