//! Session - one fresh world plus the scheduler that drives it.
//!
//! Tasks are registered in the order the collision logic relies on: stars,
//! the debris supervisor, the ship. Projectiles are appended as they are fired,
//! so they always run after the debris they may hit has registered its box.

use crate::assets::Frames;
use crate::canvas::{frame_size, Canvas, Playfield};
use crate::config::GameConfig;
use crate::scheduler::{Scheduler, Task, TaskKind, TickReport};
use crate::ship::Spaceship;
use crate::spawner::DebrisSpawner;
use crate::star::distribute_stars;
use crate::types::Controls;
use crate::world::World;

pub struct Session {
    world: World,
    scheduler: Scheduler,
}

impl Session {
    /// Build a new session for a surface of `(rows, columns)` cells.
    pub fn new(dimensions: (u16, u16), frames: Frames, config: GameConfig, seed: u64) -> Self {
        let playfield = Playfield::new(dimensions.0, dimensions.1);
        let mut world = World::new(playfield, frames, config, seed);
        let scheduler = populate(&mut world);
        log::debug!(
            "session started: {}x{} field, {} tasks, seed {seed}",
            playfield.rows,
            playfield.columns,
            scheduler.len()
        );
        Self { world, scheduler }
    }

    /// Throw away every task and all shared state and start over.
    pub fn reset(&mut self, seed: u64) {
        self.world.reset(seed);
        self.scheduler = populate(&mut self.world);
    }

    /// Run one tick with the controls read for it.
    pub fn tick(&mut self, canvas: &mut dyn Canvas, controls: Controls) -> TickReport {
        self.world.controls = controls;
        self.scheduler.tick(canvas, &mut self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// Live debris count as seen by the supervisor.
    pub fn debris_population(&self) -> usize {
        self.scheduler
            .tasks()
            .map(|task| match task {
                Task::Spawner(spawner) => spawner.live(),
                Task::Debris(_) => 1,
                _ => 0,
            })
            .sum()
    }

    pub fn ship(&self) -> Option<&Spaceship> {
        self.scheduler.tasks().find_map(|task| match task {
            Task::Ship(ship) => Some(ship),
            _ => None,
        })
    }

    pub fn projectiles(&self) -> usize {
        self.scheduler.count(TaskKind::Fire)
    }
}

fn populate(world: &mut World) -> Scheduler {
    let mut scheduler = Scheduler::new();

    for star in distribute_stars(world.playfield, world.config.sky_filling, &mut world.rng) {
        scheduler.push(Task::Star(star));
    }

    scheduler.push(Task::Spawner(DebrisSpawner::new(world)));

    let ship_frames = world.frames.ship();
    let (ship_rows, ship_columns) = ship_frames
        .first()
        .map(|frame| frame_size(frame))
        .unwrap_or((0, 0));
    let row = ((world.playfield.rows - ship_rows) / 2) as f64;
    let column = ((world.playfield.columns - ship_columns) / 2) as f64;
    scheduler.push(Task::Ship(Spaceship::new(row, column, ship_frames)));

    scheduler
}
