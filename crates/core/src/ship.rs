//! The player's ship.
//!
//! Each tick the ship erases its previous frame, applies the tick's controls
//! through [`ShipPhysics`], pins itself inside the border, draws the next
//! animation frame and, if requested, fires a projectile from its nose.

use std::rc::Rc;

use crate::canvas::{draw_frame, frame_size};
use crate::fire::Projectile;
use crate::physics::clamp_to_border;
use crate::scheduler::{Routine, Step, Task, TickContext};
use crate::types::SHIP_FRAME_TICKS;

#[derive(Debug, Clone)]
pub struct Spaceship {
    frames: Vec<Rc<str>>,
    row: f64,
    column: f64,
    velocity: (f64, f64),
    frame_index: usize,
    frame_ticks: u32,
    /// Frame index and position of the last draw, erased next tick.
    drawn: Option<(usize, f64, f64)>,
}

impl Spaceship {
    pub fn new(row: f64, column: f64, frames: &[Rc<str>]) -> Self {
        Self {
            frames: frames.to_vec(),
            row,
            column,
            velocity: (0.0, 0.0),
            frame_index: 0,
            frame_ticks: 0,
            drawn: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    /// Size of the frame currently shown, as `(rows, columns)`.
    pub fn frame_size(&self) -> (i32, i32) {
        self.frames
            .get(self.frame_index)
            .map(|frame| frame_size(frame))
            .unwrap_or((0, 0))
    }

    fn advance_animation(&mut self) {
        self.frame_ticks += 1;
        if self.frame_ticks >= SHIP_FRAME_TICKS {
            self.frame_ticks = 0;
            self.frame_index = (self.frame_index + 1) % self.frames.len().max(1);
        }
    }
}

impl Routine for Spaceship {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if let Some((index, row, column)) = self.drawn.take() {
            draw_frame(ctx.canvas, row, column, &self.frames[index], true);
        }

        let controls = ctx.world.controls;
        if controls.is_moving() {
            self.velocity = ctx.world.config.ship.update(self.velocity, controls);
            self.row += self.velocity.0;
            self.column += self.velocity.1;
        }

        let size = self.frame_size();
        (self.row, self.column) = clamp_to_border(self.row, self.column, size, ctx.world.playfield);

        if let Some(frame) = self.frames.get(self.frame_index) {
            draw_frame(ctx.canvas, self.row, self.column, frame, false);
            self.drawn = Some((self.frame_index, self.row, self.column));
        }

        if controls.fire {
            let (rows_speed, columns_speed) = ctx.world.config.projectile_speed;
            let nose = self.column + (size.1 / 2) as f64;
            ctx.spawn(Task::Fire(Projectile::new(
                self.row,
                nose,
                rows_speed,
                columns_speed,
            )));
        }

        self.advance_animation();
        Step::Yield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Frames;
    use crate::canvas::Playfield;
    use crate::config::GameConfig;
    use crate::testing::GridCanvas;
    use crate::types::{Controls, Direction};
    use crate::world::World;
    use proptest::prelude::*;

    const SHIP_A: &str = " A \nAAA";
    const SHIP_B: &str = " B \nBBB";

    fn world(rows: u16, columns: u16) -> World {
        let frames = Frames::from_texts(&[SHIP_A, SHIP_B], &["#"]).unwrap();
        World::new(Playfield::new(rows, columns), frames, GameConfig::default(), 11)
    }

    fn step(ship: &mut Spaceship, canvas: &mut GridCanvas, world: &mut World) -> Vec<Task> {
        let mut spawned = Vec::new();
        let mut ctx = TickContext::new(canvas, world, &mut spawned);
        assert_eq!(ship.step(&mut ctx), Step::Yield);
        spawned
    }

    #[test]
    fn frames_alternate_and_previous_frame_is_erased() {
        let mut canvas = GridCanvas::new(20, 20);
        let mut world = world(20, 20);
        let mut ship = Spaceship::new(5.0, 5.0, world.frames.ship());

        step(&mut ship, &mut canvas, &mut world);
        assert_eq!(canvas.char_at(6, 5), 'A');
        step(&mut ship, &mut canvas, &mut world);
        assert_eq!(canvas.char_at(6, 5), 'B');
        assert_eq!(canvas.ink(), 4);
    }

    #[test]
    fn stationary_without_input_keeps_velocity() {
        let mut canvas = GridCanvas::new(30, 30);
        let mut world = world(30, 30);
        let mut ship = Spaceship::new(10.0, 10.0, world.frames.ship());

        world.controls = Controls::new(0, 1, false);
        step(&mut ship, &mut canvas, &mut world);
        let (row, column) = ship.position();
        let velocity = ship.velocity();
        assert!(column > 10.0);

        world.controls = Controls::NEUTRAL;
        for _ in 0..5 {
            step(&mut ship, &mut canvas, &mut world);
        }
        assert_eq!(ship.position(), (row, column));
        assert_eq!(ship.velocity(), velocity);
    }

    #[test]
    fn fire_spawns_projectile_at_nose() {
        let mut canvas = GridCanvas::new(20, 20);
        let mut world = world(20, 20);
        let mut ship = Spaceship::new(5.0, 5.0, world.frames.ship());

        world.controls = Controls::new(0, 0, true);
        let spawned = step(&mut ship, &mut canvas, &mut world);
        assert_eq!(spawned.len(), 1);
        match &spawned[0] {
            Task::Fire(p) => assert_eq!(p.position(), (5.0, 6.0)),
            other => panic!("unexpected task {:?}", other.kind()),
        }
    }

    #[test]
    fn pinned_to_border_instead_of_wrapping() {
        let mut canvas = GridCanvas::new(12, 12);
        let mut world = world(12, 12);
        let mut ship = Spaceship::new(5.0, 5.0, world.frames.ship());

        world.controls = Controls::from_direction(Direction::SouthEast, false);
        for _ in 0..20 {
            step(&mut ship, &mut canvas, &mut world);
        }
        // rows 12 - frame 2 - 1, columns 12 - frame 3 - 1
        assert_eq!(ship.position(), (9.0, 8.0));
    }

    proptest! {
        #[test]
        fn diagonal_input_never_leaves_the_border(
            ticks in 1usize..120,
            dir in prop::sample::select(vec![
                Direction::NorthEast,
                Direction::NorthWest,
                Direction::SouthEast,
                Direction::SouthWest,
            ]),
            rows in 8u16..40,
            columns in 8u16..80,
        ) {
            let mut canvas = GridCanvas::new(rows, columns);
            let mut world = world(rows, columns);
            let mut ship = Spaceship::new(rows as f64 / 2.0, columns as f64 / 2.0, world.frames.ship());
            world.controls = Controls::from_direction(dir, false);

            for _ in 0..ticks {
                step(&mut ship, &mut canvas, &mut world);
                let (row, column) = ship.position();
                let (h, w) = ship.frame_size();
                prop_assert!(row >= 1.0 && column >= 1.0);
                prop_assert!(row + (h - 1) as f64 <= (rows - 2) as f64);
                prop_assert!(column + (w - 1) as f64 <= (columns - 2) as f64);
            }
        }
    }
}
