//! Canvas abstraction - the character grid every task draws onto.
//!
//! Tasks never talk to a terminal directly. They draw through [`Canvas`], which
//! the terminal crate implements on its framebuffer and tests implement on a
//! plain grid.

use crate::types::Intensity;

/// A fixed-size grid of glyph cells addressed by `(row, column)`.
pub trait Canvas {
    /// Surface size as `(rows, columns)`.
    fn dimensions(&self) -> (u16, u16);

    /// Write one glyph. Out-of-range coordinates are ignored.
    fn put_char(&mut self, row: i32, column: i32, ch: char, intensity: Intensity);

    /// Request an audible alert on the next flush.
    fn beep(&mut self) {}
}

/// Playfield bounds captured once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub rows: i32,
    pub columns: i32,
}

impl Playfield {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows: rows as i32,
            columns: columns as i32,
        }
    }

    pub fn of(canvas: &dyn Canvas) -> Self {
        let (rows, columns) = canvas.dimensions();
        Self::new(rows, columns)
    }

    /// True when `(row, column)` lies strictly inside the border.
    pub fn contains_interior(&self, row: i32, column: i32) -> bool {
        0 < row && row < self.rows - 1 && 0 < column && column < self.columns - 1
    }
}

/// Size of a multi-line glyph block as `(rows, columns)`.
pub fn frame_size(text: &str) -> (i32, i32) {
    let rows = text.lines().count() as i32;
    let columns = text
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as i32;
    (rows, columns)
}

/// Draw (or erase) a multi-line glyph block with its top-left corner at the
/// rounded `(row, column)`.
///
/// Spaces in the block are transparent. Cells above/left of the surface are
/// skipped, drawing stops at the right and bottom edges, and the bottom-right
/// corner cell is never written.
pub fn draw_frame(canvas: &mut dyn Canvas, row: f64, column: f64, text: &str, erase: bool) {
    let (rows, columns) = canvas.dimensions();
    let (rows, columns) = (rows as i32, columns as i32);
    let start_row = row.round() as i32;
    let start_column = column.round() as i32;

    for (dy, line) in text.lines().enumerate() {
        let r = start_row + dy as i32;
        if r < 0 {
            continue;
        }
        if r >= rows {
            break;
        }
        for (dx, symbol) in line.chars().enumerate() {
            let c = start_column + dx as i32;
            if c < 0 {
                continue;
            }
            if c >= columns {
                break;
            }
            if symbol == ' ' {
                continue;
            }
            if r == rows - 1 && c == columns - 1 {
                continue;
            }
            let ch = if erase { ' ' } else { symbol };
            canvas.put_char(r, c, ch, Intensity::Normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::GridCanvas;

    #[test]
    fn frame_size_counts_lines_and_longest_line() {
        assert_eq!(frame_size("ab\nabcd\n a"), (3, 4));
        assert_eq!(frame_size(""), (0, 0));
    }

    #[test]
    fn draw_frame_skips_spaces_and_rounds_position() {
        let mut canvas = GridCanvas::new(5, 5);
        canvas.put_char(1, 1, 'x', Intensity::Normal);

        draw_frame(&mut canvas, 0.6, 0.4, "a b", false);

        assert_eq!(canvas.char_at(1, 0), 'a');
        // Space is transparent: what was there stays.
        assert_eq!(canvas.char_at(1, 1), 'x');
        assert_eq!(canvas.char_at(1, 2), 'b');
    }

    #[test]
    fn draw_frame_erase_blanks_only_drawn_cells() {
        let mut canvas = GridCanvas::new(5, 5);
        draw_frame(&mut canvas, 1.0, 1.0, "ab\n c", false);
        canvas.put_char(2, 1, '*', Intensity::Normal);

        draw_frame(&mut canvas, 1.0, 1.0, "ab\n c", true);

        assert_eq!(canvas.char_at(1, 1), ' ');
        assert_eq!(canvas.char_at(1, 2), ' ');
        assert_eq!(canvas.char_at(2, 2), ' ');
        assert_eq!(canvas.char_at(2, 1), '*');
    }

    #[test]
    fn draw_frame_clips_edges_and_bottom_right_corner() {
        let mut canvas = GridCanvas::new(3, 3);
        draw_frame(&mut canvas, -1.0, -1.0, "abcd\nefgh\nijkl\nmnop", false);

        // Row -1 and column -1 are skipped entirely.
        assert_eq!(canvas.char_at(0, 0), 'f');
        assert_eq!(canvas.char_at(0, 2), 'h');
        assert_eq!(canvas.char_at(2, 1), 'o');
        assert_eq!(canvas.char_at(2, 2), ' ');
    }

    #[test]
    fn interior_excludes_the_border() {
        let field = Playfield::new(10, 20);
        assert!(field.contains_interior(1, 1));
        assert!(field.contains_interior(8, 18));
        assert!(!field.contains_interior(0, 5));
        assert!(!field.contains_interior(9, 5));
        assert!(!field.contains_interior(5, 19));
    }
}
