//! Terminal Tetriz runner (default binary).
//!
//! Owns the game loop: render, wait for input until the next tick is due,
//! then apply the buffered input and one gravity step. Quit keys end the
//! loop at any time, including after game over.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use log::{debug, info};

use tetriz::config::Config;
use tetriz::core::{GameState, TickEvent};
use tetriz::input::{handle_key_event, should_quit, InputQueue};
use tetriz::logging::init_file_logger;
use tetriz::term::{FrameBuffer, FrameClock, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    if let Some(path) = &config.log_file {
        init_file_logger(path, config.log_level)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.seed_or_now();
    info!("starting with seed {} at {} ticks/s", seed, config.tps);

    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut clock = FrameClock::new(config.tps);
    let mut input = InputQueue::new();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 30));
    let mut fb = FrameBuffer::new(w, h);
    let started = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((fb.width(), fb.height()));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        let timeout = clock.until_next_tick(elapsed_ms(started));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(
                            "quit after {} pieces, {} rows cleared",
                            game.pieces_spawned(),
                            game.rows_cleared()
                        );
                        return Ok(());
                    }
                    if !game.is_game_over() {
                        if let Some(action) = handle_key_event(key) {
                            input.push(action);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if clock.poll(elapsed_ms(started)) {
            match game.step(input.drain()) {
                TickEvent::Locked { rows_cleared } if rows_cleared > 0 => {
                    debug!("tick {}: cleared {} rows", clock.ticks(), rows_cleared);
                }
                TickEvent::GameOver => {
                    info!("game over at tick {}", clock.ticks());
                }
                _ => {}
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
