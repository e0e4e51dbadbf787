//! Falling debris.
//!
//! A piece of debris falls from the top row at a constant speed. While it is
//! on screen it keeps one obstacle box in the registry matching its drawn
//! rectangle. It ends when it falls past the bottom edge or when a projectile
//! has marked its box.

use std::rc::Rc;

use crate::canvas::{draw_frame, frame_size, Playfield};
use crate::obstacles::{Obstacle, ObstacleId};
use crate::scheduler::{Routine, Step, TickContext};
use crate::types::DEBRIS_EDGE_MARGIN;

/// Why a piece of debris left the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebrisExit {
    /// Fell past the bottom edge.
    LeftPlayfield,
    /// Hit by a projectile.
    Destroyed,
}

#[derive(Debug, Clone)]
pub struct Debris {
    frame: Rc<str>,
    row: f64,
    column: i32,
    rows_size: i32,
    columns_size: i32,
    speed: f64,
    obstacle: Option<ObstacleId>,
    drawn: bool,
    exit: Option<DebrisExit>,
}

/// Keep a frame of `frame_columns` width clear of the left and right edges.
///
/// On fields too narrow for both margins the left margin wins.
pub fn clamp_column(column: i32, frame_columns: i32, field: Playfield) -> i32 {
    column
        .min(field.columns - frame_columns - DEBRIS_EDGE_MARGIN)
        .max(DEBRIS_EDGE_MARGIN)
}

impl Debris {
    /// New debris on row 0; `column` is clamped to the legal range.
    pub fn new(frame: Rc<str>, column: i32, speed: f64, field: Playfield) -> Self {
        let (rows_size, columns_size) = frame_size(&frame);
        Self {
            row: 0.0,
            column: clamp_column(column, columns_size, field),
            rows_size,
            columns_size,
            speed,
            frame,
            obstacle: None,
            drawn: false,
            exit: None,
        }
    }

    pub fn row(&self) -> f64 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn size(&self) -> (i32, i32) {
        (self.rows_size, self.columns_size)
    }

    /// Obstacle id, allocated on the first draw.
    pub fn obstacle(&self) -> Option<ObstacleId> {
        self.obstacle
    }

    pub fn exit(&self) -> Option<DebrisExit> {
        self.exit
    }

    fn finish(&mut self, exit: DebrisExit) -> Step {
        log::debug!(
            "debris {:?} finished at row {:.1}: {:?}",
            self.obstacle.map(|id| id.raw()),
            self.row,
            exit
        );
        self.exit = Some(exit);
        Step::Done
    }
}

impl Routine for Debris {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if self.exit.is_some() {
            return Step::Done;
        }

        if self.drawn {
            draw_frame(ctx.canvas, self.row, self.column as f64, &self.frame, true);
            self.drawn = false;

            if let Some(id) = self.obstacle {
                ctx.world.obstacles.remove(id);
                if ctx.world.collisions.consume(id) {
                    return self.finish(DebrisExit::Destroyed);
                }
            }
            self.row += self.speed;
        }

        if self.row >= ctx.world.playfield.rows as f64 {
            return self.finish(DebrisExit::LeftPlayfield);
        }

        draw_frame(ctx.canvas, self.row, self.column as f64, &self.frame, false);
        self.drawn = true;

        let obstacles = &mut ctx.world.obstacles;
        let id = *self.obstacle.get_or_insert_with(|| obstacles.allocate());
        obstacles.upsert(
            id,
            Obstacle::new(
                self.row.round() as i32,
                self.column,
                self.rows_size,
                self.columns_size,
            ),
        );
        Step::Yield
    }
}
