//! Terminal starship runner (default binary).
//!
//! Loads the frame assets, then drives one session at a fixed tick rate:
//! drain input, run every task once, redraw the border, flush the diff, sleep.
//! Set `RUST_LOG` and redirect stderr to see the simulation log.

use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};

use tui_starship::core::{Frames, GameConfig, Session};
use tui_starship::input::InputHandler;
use tui_starship::term::{FrameBuffer, TerminalRenderer};

const BUNDLED_FRAMES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/frames");

fn main() -> Result<()> {
    env_logger::init();

    // Assets first: a missing frame must fail before the terminal is touched.
    let frames = Frames::load(&frames_dir()).context("loading frame assets")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, frames);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn frames_dir() -> PathBuf {
    let local = PathBuf::from("frames");
    if local.is_dir() {
        local
    } else {
        PathBuf::from(BUNDLED_FRAMES)
    }
}

fn run(term: &mut TerminalRenderer, frames: Frames) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let config = GameConfig::default();
    let tick = config.tick;

    let mut fb = FrameBuffer::new(w, h);
    let mut session = Session::new((h, w), frames, config, rand::random());
    let mut input_handler = InputHandler::new();
    log::info!("running on a {w}x{h} terminal, tick {tick:?}");

    loop {
        let controls = input_handler.poll()?;
        if input_handler.quit_requested() {
            return Ok(());
        }

        session.tick(&mut fb, controls);
        fb.draw_border();
        term.draw(&mut fb)?;

        thread::sleep(tick);
    }
}
