//! In-memory canvas used by unit tests.

use crate::canvas::Canvas;
use crate::types::Intensity;

#[derive(Debug, Clone)]
pub struct GridCanvas {
    rows: u16,
    columns: u16,
    cells: Vec<(char, Intensity)>,
    pub beeps: u32,
}

impl GridCanvas {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            cells: vec![(' ', Intensity::Normal); rows as usize * columns as usize],
            beeps: 0,
        }
    }

    fn idx(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 || row >= self.rows as i32 || column >= self.columns as i32 {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    pub fn char_at(&self, row: i32, column: i32) -> char {
        self.idx(row, column).map(|i| self.cells[i].0).unwrap_or(' ')
    }

    pub fn intensity_at(&self, row: i32, column: i32) -> Intensity {
        self.idx(row, column)
            .map(|i| self.cells[i].1)
            .unwrap_or_default()
    }

    /// Number of non-space cells.
    pub fn ink(&self) -> usize {
        self.cells.iter().filter(|(ch, _)| *ch != ' ').count()
    }
}

impl Canvas for GridCanvas {
    fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn put_char(&mut self, row: i32, column: i32, ch: char, intensity: Intensity) {
        if let Some(i) = self.idx(row, column) {
            self.cells[i] = (ch, intensity);
        }
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }
}
