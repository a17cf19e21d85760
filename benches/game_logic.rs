use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_mastermind::core::{score_symbols, GameSession, PatternGenerator, SessionSnapshot};
use tui_mastermind::term::{FrameBuffer, GameView, Viewport};
use tui_mastermind::types::{Command, Symbol};

fn bench_score(c: &mut Criterion) {
    use Symbol::*;
    let guess = [Fill, Vertical, Blank, Horizontal];
    let secret = [Fill, Blank, Vertical, Horizontal];

    c.bench_function("score_row", |b| {
        b.iter(|| score_symbols(black_box(&guess), black_box(&secret)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut generator = PatternGenerator::new(12345);

    c.bench_function("generate_secret", |b| b.iter(|| generator.generate()));
}

fn bench_round(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("play_and_cancel_round", |b| {
        b.iter(|| {
            session.update([Command::Confirm]);
            for _ in 0..4 {
                session.update([Command::CycleSymbol, Command::MoveCursorRight]);
            }
            session.update([Command::Confirm, Command::Cancel]);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.update([Command::Confirm, Command::CycleSymbol]);
    let mut snap = SessionSnapshot::default();
    session.snapshot_into(&mut snap);

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_playing_frame", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(benches, bench_score, bench_generate, bench_round, bench_render);
criterion_main!(benches);
