//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries: tasks draw into a persistent framebuffer
//! through the core `Canvas` trait, and the renderer flushes only what changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One flush per tick, with diffing so idle cells cost nothing
//! - Dim/normal/bold glyph intensities mapped onto terminal attributes

pub mod fb;
pub mod renderer;

pub use tui_starship_core as core;
pub use tui_starship_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
