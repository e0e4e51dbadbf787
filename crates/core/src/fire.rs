//! Projectiles fired from the ship.
//!
//! A shot shows a charge glyph, then a muzzle flash, then travels in a straight
//! line. Each tick it checks the obstacle registry before drawing; the first box
//! containing its cell is marked as hit and the shot ends.

use crate::obstacles::ObstacleId;
use crate::scheduler::{Routine, Step, TickContext};
use crate::types::Intensity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirePhase {
    Charge,
    Flash,
    Flight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileExit {
    /// Left the interior without hitting anything.
    Missed,
    Hit(ObstacleId),
}

#[derive(Debug, Clone)]
pub struct Projectile {
    row: f64,
    column: f64,
    rows_speed: f64,
    columns_speed: f64,
    phase: FirePhase,
    drawn: Option<(i32, i32)>,
    exit: Option<ProjectileExit>,
}

impl Projectile {
    pub fn new(row: f64, column: f64, rows_speed: f64, columns_speed: f64) -> Self {
        Self {
            row,
            column,
            rows_speed,
            columns_speed,
            phase: FirePhase::Charge,
            drawn: None,
            exit: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn phase(&self) -> FirePhase {
        self.phase
    }

    pub fn exit(&self) -> Option<ProjectileExit> {
        self.exit
    }

    /// Glyph drawn while in flight.
    pub fn trail_symbol(&self) -> char {
        if self.columns_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    fn finish(&mut self, exit: ProjectileExit) -> Step {
        self.exit = Some(exit);
        Step::Done
    }
}

impl Routine for Projectile {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if self.exit.is_some() {
            return Step::Done;
        }

        if let Some((row, column)) = self.drawn.take() {
            ctx.canvas.put_char(row, column, ' ', Intensity::Normal);
        }

        let glyph = match self.phase {
            FirePhase::Charge => {
                ctx.canvas.beep();
                self.phase = FirePhase::Flash;
                '*'
            }
            FirePhase::Flash => {
                self.phase = FirePhase::Flight;
                'O'
            }
            FirePhase::Flight => {
                self.row += self.rows_speed;
                self.column += self.columns_speed;
                self.trail_symbol()
            }
        };

        let (row, column) = (self.row.round() as i32, self.column.round() as i32);
        if !ctx.world.playfield.contains_interior(row, column) {
            return self.finish(ProjectileExit::Missed);
        }

        if let Some(id) = ctx.world.obstacles.find_at(row, column) {
            let first = ctx.world.collisions.mark(id);
            log::debug!(
                "projectile hit obstacle {} at ({row}, {column}), first hit: {first}",
                id.raw()
            );
            return self.finish(ProjectileExit::Hit(id));
        }

        ctx.canvas.put_char(row, column, glyph, Intensity::Normal);
        self.drawn = Some((row, column));
        Step::Yield
    }
}
