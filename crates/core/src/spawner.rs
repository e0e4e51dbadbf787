//! Debris supervisor.
//!
//! Owns a fixed population of debris. Each tick it resumes only the first `w`
//! pieces, with `w` cycling 1, 2, ..., population, 1, ... so pieces near the
//! front fall more often than those at the back. Every piece that finishes
//! during the pass is replaced by a fresh one at the end of the list.

use rand::seq::IndexedRandom;
use rand::Rng;
use slotmap::new_key_type;

use crate::debris::Debris;
use crate::scheduler::{Roster, Routine, Step, TickContext};
use crate::world::World;

new_key_type! {
    pub struct DebrisKey;
}

#[derive(Debug, Clone)]
pub struct DebrisSpawner {
    live: Roster<DebrisKey, Debris>,
    population: usize,
    window: usize,
    replaced: u64,
}

/// A new piece with a random frame and a random (then clamped) column.
pub fn spawn_debris(world: &mut World) -> Option<Debris> {
    let frame = world.frames.debris().choose(&mut world.rng).cloned()?;
    let column = world.rng.random_range(0..world.playfield.columns.max(1));
    Some(Debris::new(
        frame,
        column,
        world.config.debris_speed,
        world.playfield,
    ))
}

impl DebrisSpawner {
    /// Fill the initial population from the world's config.
    pub fn new(world: &mut World) -> Self {
        let population = world.config.debris_population;
        let mut live = Roster::new();
        for _ in 0..population {
            if let Some(debris) = spawn_debris(world) {
                live.push(debris);
            }
        }
        Self {
            live,
            population,
            window: 1,
            replaced: 0,
        }
    }

    /// Number of live pieces.
    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn debris(&self) -> impl Iterator<Item = &Debris> {
        self.live.iter()
    }

    /// Size of the window resumed next tick.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Total pieces replaced so far.
    pub fn replaced(&self) -> u64 {
        self.replaced
    }
}

impl Routine for DebrisSpawner {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if self.population == 0 {
            return Step::Yield;
        }

        let mut finished = Vec::new();
        for key in self.live.first_keys(self.window) {
            if let Some(debris) = self.live.get_mut(key) {
                if debris.step(ctx).is_done() {
                    finished.push(key);
                }
            }
        }

        for key in finished {
            let exit = self.live.remove(key).and_then(|d| d.exit());
            if let Some(debris) = spawn_debris(ctx.world) {
                log::debug!(
                    "replacing debris ({:?}) with new piece at column {}",
                    exit,
                    debris.column()
                );
                self.live.push(debris);
                self.replaced += 1;
            }
        }

        self.window = self.window % self.population + 1;
        Step::Yield
    }
}
