//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Controls`] and drains pending
//! input once per tick without blocking.

pub mod handler;
pub mod map;

pub use tui_starship_types as types;

pub use handler::{drain_pending_keys, InputHandler, MAX_EVENTS_PER_TICK};
pub use map::{handle_key_event, should_quit, ControlKey};
