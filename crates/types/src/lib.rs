//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (task logic, terminal rendering, input mapping).
//!
//! # Timing
//!
//! Everything in the simulation is counted in ticks. One tick is one scheduler
//! pass, one rendered frame and one fixed sleep:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Sleep between two ticks |
//! | `STAR_DIM_TICKS` | 20 | Ticks a star stays dim |
//! | `STAR_NORMAL_TICKS` | 3 | Ticks a star stays normal (after dim) |
//! | `STAR_BOLD_TICKS` | 5 | Ticks a star stays bold |
//! | `STAR_FADE_TICKS` | 3 | Ticks a star stays normal (after bold) |
//! | `STAR_MAX_OFFSET_TICKS` | 10 | Upper bound of the startup jitter |
//!
//! Blink cadence is tied to the tick rate: halving `TICK_MS` doubles the blink
//! speed.
//!
//! # Examples
//!
//! ```
//! use tui_starship_types::{Controls, Direction, Intensity};
//!
//! let controls = Controls::new(-1, 1, false);
//! assert_eq!(controls.direction(), Direction::NorthEast);
//! assert!(controls.is_moving());
//!
//! assert_eq!(Intensity::Bold.as_str(), "bold");
//! ```

/// Fixed sleep between two ticks in milliseconds.
pub const TICK_MS: u32 = 100;

/// Glyphs a star may be drawn with.
pub const STAR_SYMBOLS: &str = "+*.:";

/// Percentage of the sky covered by stars (before the /25 thinning).
pub const SKY_FILLING: u32 = 30;

/// Ticks a star stays dim.
pub const STAR_DIM_TICKS: u32 = 20;

/// Ticks a star stays at normal intensity on its way up.
pub const STAR_NORMAL_TICKS: u32 = 3;

/// Ticks a star stays bold.
pub const STAR_BOLD_TICKS: u32 = 5;

/// Ticks a star stays at normal intensity on its way down.
pub const STAR_FADE_TICKS: u32 = 3;

/// Largest startup jitter (in ticks) before a star starts blinking.
pub const STAR_MAX_OFFSET_TICKS: u32 = 10;

/// Number of debris pieces kept alive at all times.
pub const DEBRIS_POPULATION: usize = 6;

/// Rows a debris piece falls per resumption.
pub const DEBRIS_SPEED: f64 = 0.5;

/// Cells kept free between debris and the left/right edges.
pub const DEBRIS_EDGE_MARGIN: i32 = 2;

/// Default vertical projectile speed (negative = up).
pub const PROJECTILE_ROW_SPEED: f64 = -0.3;

/// Default horizontal projectile speed.
pub const PROJECTILE_COLUMN_SPEED: f64 = 0.0;

/// Per-axis ship speed limit in cells per tick.
pub const SHIP_SPEED_LIMIT: f64 = 2.0;

/// Multiplier applied to a ship axis that receives no input on a moving tick.
pub const SHIP_FADING: f64 = 0.8;

/// Ticks each ship animation frame stays on screen.
pub const SHIP_FRAME_TICKS: u32 = 1;

/// Cells kept free between the ship and every edge.
pub const SHIP_BORDER_MARGIN: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_cadence_defaults() {
        assert_eq!(STAR_DIM_TICKS, 20);
        assert_eq!(STAR_NORMAL_TICKS, 3);
        assert_eq!(STAR_BOLD_TICKS, 5);
        assert_eq!(STAR_FADE_TICKS, 3);
        assert_eq!(TICK_MS, 100);
    }

    #[test]
    fn direction_round_trips_through_deltas() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.deltas();
            assert_eq!(Direction::from_deltas(dr, dc), dir);
        }
    }

    #[test]
    fn controls_clamp_out_of_range_deltas() {
        let c = Controls::new(5, -7, true);
        assert_eq!(c.rows_direction, 1);
        assert_eq!(c.columns_direction, -1);
        assert!(c.fire);
    }
}

/// Glyph intensity, mirroring the terminal's dim/normal/bold attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    Dim,
    #[default]
    Normal,
    Bold,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Dim => "dim",
            Intensity::Normal => "normal",
            Intensity::Bold => "bold",
        }
    }
}

/// One of the eight compass directions, or none.
///
/// Rows grow downwards, so `North` is a row delta of -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Direction::None,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Row and column deltas, each in `{-1, 0, 1}`.
    pub fn deltas(&self) -> (i8, i8) {
        match self {
            Direction::None => (0, 0),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Build a direction from row/column deltas. Values are reduced to their sign.
    pub fn from_deltas(rows: i8, columns: i8) -> Self {
        match (rows.signum(), columns.signum()) {
            (-1, 0) => Direction::North,
            (-1, 1) => Direction::NorthEast,
            (0, 1) => Direction::East,
            (1, 1) => Direction::SouthEast,
            (1, 0) => Direction::South,
            (1, -1) => Direction::SouthWest,
            (0, -1) => Direction::West,
            (-1, -1) => Direction::NorthWest,
            _ => Direction::None,
        }
    }
}

/// Player controls gathered during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Controls {
    pub rows_direction: i8,
    pub columns_direction: i8,
    pub fire: bool,
}

impl Controls {
    /// Neutral controls: no movement, no fire.
    pub const NEUTRAL: Controls = Controls {
        rows_direction: 0,
        columns_direction: 0,
        fire: false,
    };

    pub fn new(rows_direction: i8, columns_direction: i8, fire: bool) -> Self {
        Self {
            rows_direction: rows_direction.signum(),
            columns_direction: columns_direction.signum(),
            fire,
        }
    }

    pub fn from_direction(direction: Direction, fire: bool) -> Self {
        let (rows, columns) = direction.deltas();
        Self::new(rows, columns, fire)
    }

    pub fn direction(&self) -> Direction {
        Direction::from_deltas(self.rows_direction, self.columns_direction)
    }

    pub fn is_moving(&self) -> bool {
        self.rows_direction != 0 || self.columns_direction != 0
    }
}
