//! Session-scoped shared state.
//!
//! Everything tasks share lives here and is handed to each step by `&mut`.
//! Only one task runs at a time, so no locking is needed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::assets::Frames;
use crate::canvas::Playfield;
use crate::config::GameConfig;
use crate::obstacles::{CollisionMarks, ObstacleRegistry};
use crate::types::Controls;

pub struct World {
    pub playfield: Playfield,
    pub frames: Frames,
    pub config: GameConfig,
    pub obstacles: ObstacleRegistry,
    pub collisions: CollisionMarks,
    /// Controls read at the start of the current tick.
    pub controls: Controls,
    pub rng: Pcg32,
    tick: u64,
}

impl World {
    pub fn new(playfield: Playfield, frames: Frames, config: GameConfig, seed: u64) -> Self {
        Self {
            playfield,
            frames,
            config,
            obstacles: ObstacleRegistry::new(),
            collisions: CollisionMarks::new(),
            controls: Controls::NEUTRAL,
            rng: Pcg32::seed_from_u64(seed),
            tick: 0,
        }
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub(crate) fn advance_tick(&mut self) {
        self.tick += 1;
    }

    /// Drop all obstacle and collision state and reseed.
    pub fn reset(&mut self, seed: u64) {
        self.obstacles = ObstacleRegistry::new();
        self.collisions.clear();
        self.controls = Controls::NEUTRAL;
        self.rng = Pcg32::seed_from_u64(seed);
        self.tick = 0;
    }
}
