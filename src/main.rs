//! Terminal Mastermind runner (default binary).
//!
//! Owns the session and the terminal. Keys are mapped to commands as they
//! arrive and handed to the session once per tick; the frame is redrawn only
//! when the visible state changes.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::info;

use tui_mastermind::core::{GameSession, SessionSignal, SessionSnapshot};
use tui_mastermind::input::{handle_key_event, should_quit, CommandBatch};
use tui_mastermind::term::{fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_mastermind::types::TICK_MS;
use tui_mastermind::{logging, AppConfig};

/// Keep-alive redraw interval while nothing changes.
const IDLE_REDRAW_MS: u64 = 1_000;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(seed = config.seed, "starting Mastermind");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = GameSession::new(config.seed);
    let view = GameView::default();
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let mut batch = CommandBatch::new();

    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint(&snap, viewport)) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        batch.push(command);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !batch.is_empty() && session.update(batch.drain()) == SessionSignal::Exit {
                return Ok(());
            }
        }
    }
}
