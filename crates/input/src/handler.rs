//! Per-tick control polling.
//!
//! The terminal is drained without blocking once per tick. Every key pressed
//! since the previous tick contributes to that tick's controls: steering keys
//! set their axes (the last key per axis wins, so Up then Left is a diagonal)
//! and any fire key requests a shot.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit, ControlKey};
use crate::types::Controls;

/// Upper bound on key events consumed in one tick; the rest wait for the next.
pub const MAX_EVENTS_PER_TICK: usize = 32;

/// Accumulates key presses between two ticks.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    rows_direction: i8,
    columns_direction: i8,
    fire: bool,
    quit: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_press(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        match handle_key_event(key) {
            Some(ControlKey::Steer(direction)) => {
                let (rows, columns) = direction.deltas();
                if rows != 0 {
                    self.rows_direction = rows;
                }
                if columns != 0 {
                    self.columns_direction = columns;
                }
            }
            Some(ControlKey::Fire) => self.fire = true,
            None => {}
        }
    }

    /// Controls gathered since the last call; resets to neutral.
    pub fn take_controls(&mut self) -> Controls {
        let controls = Controls::new(self.rows_direction, self.columns_direction, self.fire);
        self.rows_direction = 0;
        self.columns_direction = 0;
        self.fire = false;
        controls
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Drain pending terminal input and return this tick's controls.
    ///
    /// Never blocks; returns neutral controls when nothing is pending.
    pub fn poll(&mut self) -> Result<Controls> {
        for key in drain_pending_keys()? {
            self.handle_key_press(key);
        }
        Ok(self.take_controls())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Read every pending key press (and auto-repeat) without waiting.
pub fn drain_pending_keys() -> Result<ArrayVec<KeyEvent, MAX_EVENTS_PER_TICK>> {
    let mut keys = ArrayVec::new();
    while !keys.is_full() && event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                keys.push(key);
            }
        }
    }
    Ok(keys)
}
