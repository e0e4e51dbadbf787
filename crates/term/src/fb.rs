//! Framebuffer and style types for terminal rendering.
//!
//! The framebuffer is the persistent drawing surface of a session: tasks draw
//! and erase on it through [`Canvas`], and nothing is cleared between ticks.

use crate::core::Canvas;
use crate::types::Intensity;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub fn with_intensity(intensity: Intensity) -> Self {
        Self {
            bold: intensity == Intensity::Bold,
            dim: intensity == Intensity::Dim,
            ..Self::default()
        }
    }

    pub fn intensity(&self) -> Intensity {
        if self.bold {
            Intensity::Bold
        } else if self.dim {
            Intensity::Dim
        } else {
            Intensity::Normal
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    bell: bool,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            bell: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Copy every cell from `other`, which must have the same size.
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        if self.width == other.width && self.height == other.height {
            self.cells.copy_from_slice(&other.cells);
        } else {
            *self = other.clone();
        }
        self.bell = false;
    }

    /// Take the pending bell request, if any.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    /// Draw a single-line box along the outer edge.
    pub fn draw_border(&mut self) {
        let (w, h) = (self.width, self.height);
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::default();

        self.put_char(0, 0, '┌', style);
        self.put_char(w - 1, 0, '┐', style);
        self.put_char(0, h - 1, '└', style);
        self.put_char(w - 1, h - 1, '┘', style);

        for x in 1..w - 1 {
            self.put_char(x, 0, '─', style);
            self.put_char(x, h - 1, '─', style);
        }
        for y in 1..h - 1 {
            self.put_char(0, y, '│', style);
            self.put_char(w - 1, y, '│', style);
        }
    }

    /// All rows as plain strings, for assertions and debugging.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.get(x, y).unwrap_or_default().ch)
                    .collect()
            })
            .collect()
    }
}

impl Canvas for FrameBuffer {
    fn dimensions(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    fn put_char(&mut self, row: i32, column: i32, ch: char, intensity: Intensity) {
        if row < 0 || column < 0 || row > u16::MAX as i32 || column > u16::MAX as i32 {
            return;
        }
        FrameBuffer::put_char(
            self,
            column as u16,
            row as u16,
            ch,
            CellStyle::with_intensity(intensity),
        );
    }

    fn beep(&mut self) {
        self.bell = true;
    }
}
