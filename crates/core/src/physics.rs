//! Ship motion model: per-axis acceleration and border clamping.

use crate::canvas::Playfield;
use crate::types::{Controls, SHIP_BORDER_MARGIN, SHIP_FADING, SHIP_SPEED_LIMIT};

/// Increment applied at zero speed; shrinks as speed approaches the limit.
const ACCELERATION: f64 = 0.75;

/// Speeds below this magnitude snap to zero.
const SPEED_EPSILON: f64 = 0.1;

/// Accelerate one axis towards (or away from) its limit.
///
/// The increment is `cos(speed / limit) * 0.75`, so it is largest at rest and
/// tapers off near the limit. The result is clamped to `[-limit, limit]`.
pub fn apply_acceleration(speed: f64, speed_limit: f64, forward: bool) -> f64 {
    let limit = speed_limit.abs();
    if limit == 0.0 {
        return 0.0;
    }
    let delta = (speed / limit).cos() * ACCELERATION;
    let next = if forward { speed + delta } else { speed - delta };
    let next = next.clamp(-limit, limit);
    if next.abs() < SPEED_EPSILON {
        0.0
    } else {
        next
    }
}

/// Tunable constants of the ship's motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipPhysics {
    pub row_speed_limit: f64,
    pub column_speed_limit: f64,
    /// Factor applied to an axis without input on a tick that has input.
    pub fading: f64,
}

impl Default for ShipPhysics {
    fn default() -> Self {
        Self {
            row_speed_limit: SHIP_SPEED_LIMIT,
            column_speed_limit: SHIP_SPEED_LIMIT,
            fading: SHIP_FADING,
        }
    }
}

impl ShipPhysics {
    /// Combine the requested direction with the current velocity.
    ///
    /// Neutral controls leave the velocity untouched.
    pub fn update(&self, velocity: (f64, f64), controls: Controls) -> (f64, f64) {
        if !controls.is_moving() {
            return velocity;
        }
        let (row_speed, column_speed) = velocity;
        (
            self.axis(row_speed, self.row_speed_limit, controls.rows_direction),
            self.axis(column_speed, self.column_speed_limit, controls.columns_direction),
        )
    }

    fn axis(&self, speed: f64, limit: f64, direction: i8) -> f64 {
        match direction.signum() {
            1 => apply_acceleration(speed, limit, true),
            -1 => apply_acceleration(speed, limit, false),
            _ => {
                let faded = speed * self.fading;
                if faded.abs() < SPEED_EPSILON {
                    0.0
                } else {
                    faded
                }
            }
        }
    }
}

/// Pin a frame's top-left corner so the whole frame stays inside the border.
///
/// Legal rows are `[1, rows - frame_rows - 1]` and legal columns
/// `[1, columns - frame_columns - 1]`. When the frame is larger than the field
/// the top/left edge wins.
pub fn clamp_to_border(
    row: f64,
    column: f64,
    frame: (i32, i32),
    field: Playfield,
) -> (f64, f64) {
    let (frame_rows, frame_columns) = frame;
    let min = SHIP_BORDER_MARGIN as f64;
    let max_row = (field.rows - frame_rows - SHIP_BORDER_MARGIN) as f64;
    let max_column = (field.columns - frame_columns - SHIP_BORDER_MARGIN) as f64;
    (row.min(max_row).max(min), column.min(max_column).max(min))
}
