//! Core simulation module - tasks, scheduler and shared session state
//!
//! This crate contains everything that moves on screen and the cooperative
//! scheduler that moves it. It has no terminal dependency: tasks draw through
//! the [`Canvas`] trait, which the term crate implements on its framebuffer.
//!
//! - **Deterministic**: the same seed and the same controls give the same session
//! - **Testable**: every task can be stepped by hand against an in-memory grid
//! - **Single-threaded**: exactly one task runs at a time, so shared state needs no locks
//!
//! # Module Structure
//!
//! - [`canvas`]: the drawing surface trait and glyph-block helpers
//! - [`assets`]: ship and debris frames loaded at startup
//! - [`obstacles`]: debris bounding boxes and collision marks
//! - [`physics`]: ship acceleration and border clamping
//! - [`scheduler`]: the task model and the round-robin tick driver
//! - [`star`], [`debris`], [`fire`], [`ship`], [`spawner`]: the tasks
//! - [`world`], [`session`]: per-session state and its setup
//!
//! # Tick order
//!
//! Within a tick tasks run in registration order: stars, the debris supervisor,
//! the ship, then projectiles in firing order. A projectile therefore always
//! sees the box its target registered earlier in the same tick, and the debris
//! sees the collision mark on its very next resumption.
//!
//! # Example
//!
//! ```
//! use tui_starship_core::{Canvas, Frames, GameConfig, Session};
//! use tui_starship_core::types::{Controls, Intensity};
//!
//! struct Blank;
//!
//! impl Canvas for Blank {
//!     fn dimensions(&self) -> (u16, u16) {
//!         (24, 80)
//!     }
//!     fn put_char(&mut self, _row: i32, _column: i32, _ch: char, _intensity: Intensity) {}
//! }
//!
//! let frames = Frames::from_texts(&["/^\\"], &["###"]).unwrap();
//! let mut session = Session::new((24, 80), frames, GameConfig::default(), 7);
//!
//! let report = session.tick(&mut Blank, Controls::new(0, 0, true));
//! assert_eq!(report.spawned, 1);
//! assert_eq!(session.debris_population(), 6);
//! ```

pub mod assets;
pub mod canvas;
pub mod config;
pub mod debris;
pub mod fire;
pub mod obstacles;
pub mod physics;
pub mod scheduler;
pub mod session;
pub mod ship;
pub mod spawner;
pub mod star;
pub mod world;

#[cfg(test)]
mod testing;

pub use tui_starship_types as types;

// Re-export commonly used types for convenience
pub use assets::{AssetError, Frames};
pub use canvas::{draw_frame, frame_size, Canvas, Playfield};
pub use config::GameConfig;
pub use debris::{Debris, DebrisExit};
pub use fire::{FirePhase, Projectile, ProjectileExit};
pub use obstacles::{CollisionMarks, Obstacle, ObstacleId, ObstacleRegistry};
pub use physics::{apply_acceleration, clamp_to_border, ShipPhysics};
pub use scheduler::{Roster, Routine, Scheduler, Step, Task, TaskKey, TaskKind, TickContext, TickReport};
pub use session::Session;
pub use ship::Spaceship;
pub use spawner::DebrisSpawner;
pub use star::{BlinkPhase, StarBlink};
pub use world::World;
