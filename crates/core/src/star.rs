//! Blinking stars.
//!
//! Each star waits a random 1-10 tick offset, then cycles forever through
//! dim (20 ticks), normal (3), bold (5) and normal (3). The offset keeps the
//! sky from pulsing in lockstep.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::canvas::Playfield;
use crate::scheduler::{Routine, Step, TickContext};
use crate::types::{
    Intensity, STAR_BOLD_TICKS, STAR_DIM_TICKS, STAR_FADE_TICKS, STAR_MAX_OFFSET_TICKS,
    STAR_NORMAL_TICKS, STAR_SYMBOLS,
};

/// Where a star is in its blink cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    /// Startup jitter; nothing drawn yet.
    Idle,
    Dim,
    Normal,
    Bold,
    /// Normal intensity on the way back down to dim.
    Fade,
}

impl BlinkPhase {
    pub fn next(self) -> Self {
        match self {
            BlinkPhase::Idle | BlinkPhase::Fade => BlinkPhase::Dim,
            BlinkPhase::Dim => BlinkPhase::Normal,
            BlinkPhase::Normal => BlinkPhase::Bold,
            BlinkPhase::Bold => BlinkPhase::Fade,
        }
    }

    /// Ticks the phase lasts once entered.
    pub fn hold(self) -> u32 {
        match self {
            BlinkPhase::Idle => 0,
            BlinkPhase::Dim => STAR_DIM_TICKS,
            BlinkPhase::Normal => STAR_NORMAL_TICKS,
            BlinkPhase::Bold => STAR_BOLD_TICKS,
            BlinkPhase::Fade => STAR_FADE_TICKS,
        }
    }

    pub fn intensity(self) -> Option<Intensity> {
        match self {
            BlinkPhase::Idle => None,
            BlinkPhase::Dim => Some(Intensity::Dim),
            BlinkPhase::Normal | BlinkPhase::Fade => Some(Intensity::Normal),
            BlinkPhase::Bold => Some(Intensity::Bold),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarBlink {
    row: i32,
    column: i32,
    symbol: char,
    phase: BlinkPhase,
    remaining: u32,
}

impl StarBlink {
    /// A star that starts blinking after `offset_ticks` idle ticks.
    pub fn new(row: i32, column: i32, symbol: char, offset_ticks: u32) -> Self {
        Self {
            row,
            column,
            symbol,
            phase: BlinkPhase::Idle,
            remaining: offset_ticks,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.column)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }
}

impl Routine for StarBlink {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if self.remaining == 0 {
            self.phase = self.phase.next();
            if let Some(intensity) = self.phase.intensity() {
                ctx.canvas
                    .put_char(self.row, self.column, self.symbol, intensity);
            }
            self.remaining = self.phase.hold();
        }
        self.remaining = self.remaining.saturating_sub(1);
        Step::Yield
    }
}

/// How many stars a field of this size gets at the given density.
pub fn star_count(field: Playfield, sky_filling: u32) -> usize {
    let cells = field.rows.max(0) as u64 * field.columns.max(0) as u64;
    (cells * sky_filling as u64 / 100 / 25) as usize
}

/// Scatter stars over the field, keeping two cells clear of every edge.
pub fn distribute_stars<R: Rng + ?Sized>(
    field: Playfield,
    sky_filling: u32,
    rng: &mut R,
) -> Vec<StarBlink> {
    let (max_row, max_column) = (field.rows - 2, field.columns - 2);
    if max_row < 2 || max_column < 2 {
        return Vec::new();
    }
    let symbols: Vec<char> = STAR_SYMBOLS.chars().collect();

    (0..star_count(field, sky_filling))
        .map(|_| {
            let symbol = symbols.choose(rng).copied().unwrap_or('*');
            let row = rng.random_range(2..=max_row);
            let column = rng.random_range(2..=max_column);
            let offset = rng.random_range(1..=STAR_MAX_OFFSET_TICKS);
            StarBlink::new(row, column, symbol, offset)
        })
        .collect()
}
