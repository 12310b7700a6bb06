//! Terminal runner (default binary).
//!
//! Polls keys, feeds measured elapsed time to the engine, and redraws through
//! the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};

use blockfall::config::AppConfig;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{translate, Command};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config)?;

    let seed = config.resolve_seed();
    let game_state = GameState::try_new(config.engine.clone(), seed).context("invalid engine config")?;
    info!(seed, width = config.engine.width, height = config.engine.height, "starting");

    // Restore the terminal even if the loop panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = TerminalRenderer::new().exit();
        original_hook(panic_info);
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game_state, config.frame_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game_state: GameState, frame_ms: u32) -> Result<()> {
    game_state.start();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(frame_ms as u64);
    let mut last_tick = Instant::now();
    let mut last_size = (0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        if (w, h) != last_size {
            last_size = (w, h);
            let min = view.min_viewport(&snap);
            if w < min.width || h < min.height {
                warn!(width = w, height = h, min_width = min.width, min_height = min.height, "terminal too small");
            }
        }
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match translate(key) {
                    Some(Command::Quit) => {
                        info!(score = game_state.score(), "quit");
                        return Ok(());
                    }
                    Some(Command::Action(action)) => {
                        game_state.apply_action(action);
                    }
                    None => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        if elapsed_ms > 0 {
            last_tick += Duration::from_millis(elapsed_ms as u64);
            game_state.tick(elapsed_ms);
        }
    }
}
