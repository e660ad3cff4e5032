//! FrameBuffer and the cell canvas.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what the terminal
//! preview should display. [`CellCanvas`] implements [`Canvas`] on top of it
//! by dividing device pixels into cells.
//!
//! # Design Decisions
//!
//! - **Flat storage**: Uses `Vec<Cell>` with row-major indexing for cache efficiency.
//! - **Clipping**: Writes outside the buffer are ignored, never wrapped.
//! - **Wide characters**: A wide glyph occupies its cell; the next cell is left as is.

use unicode_width::UnicodeWidthStr;

use super::canvas::{Align, Canvas, Icon};
use crate::types::{Attr, Cell, Coord, Rgba};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Get buffer width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get buffer height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) to flat index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Get raw cells slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill every cell with a blank of the given background.
    pub fn fill(&mut self, bg: Rgba) {
        for cell in &mut self.cells {
            *cell = Cell {
                ch: ' ',
                bg,
                ..Cell::default()
            };
        }
    }

    /// Set the background of a rectangle of cells, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgba) {
        for cy in y..y.saturating_add(height).min(self.height) {
            for cx in x..x.saturating_add(width).min(self.width) {
                if let Some(cell) = self.get_mut(cx, cy) {
                    cell.bg = bg;
                }
            }
        }
    }

    /// Write a character keeping the cell background.
    pub fn set_char(&mut self, x: u16, y: u16, ch: char, fg: Rgba, attrs: Attr) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.ch = ch;
            cell.fg = fg;
            cell.attrs = attrs;
        }
    }

    /// Write a string left to right from `(x, y)`, clipped at the right edge.
    pub fn set_text(&mut self, x: u16, y: u16, text: &str, fg: Rgba, attrs: Attr) {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            self.set_char(cx, y, ch, fg, attrs);
            cx = cx.saturating_add(1);
        }
    }

    /// Text content of one row, for assertions and logging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }
}

// =============================================================================
// CellCanvas
// =============================================================================

/// A [`Canvas`] that rasterizes draw calls into a [`FrameBuffer`].
///
/// Each cell covers `scale_x` by `scale_y` device pixels.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    buffer: FrameBuffer,
    scale_x: Coord,
    scale_y: Coord,
}

impl CellCanvas {
    /// Create a canvas of `width` by `height` cells.
    pub fn new(width: u16, height: u16, scale_x: Coord, scale_y: Coord) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
            scale_x: scale_x.max(1),
            scale_y: scale_y.max(1),
        }
    }

    /// Create a canvas large enough for `px_width` by `px_height` pixels.
    pub fn for_pixels(px_width: Coord, px_height: Coord, scale_x: Coord, scale_y: Coord) -> Self {
        let scale_x = scale_x.max(1);
        let scale_y = scale_y.max(1);
        let width = (px_width + scale_x - 1) / scale_x;
        let height = (px_height + scale_y - 1) / scale_y;
        Self::new(to_cell(width), to_cell(height), scale_x, scale_y)
    }

    /// The rasterized cells.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Pixels per cell, horizontally and vertically.
    pub fn scale(&self) -> (Coord, Coord) {
        (self.scale_x, self.scale_y)
    }

    fn col(&self, x: Coord) -> Option<u16> {
        (x >= 0).then(|| to_cell(x / self.scale_x))
    }

    fn line(&self, y: Coord) -> Option<u16> {
        (y >= 0).then(|| to_cell(y / self.scale_y))
    }
}

fn to_cell(value: Coord) -> u16 {
    value.clamp(0, u16::MAX as Coord) as u16
}

/// Terminal stand-in for an icon bitmap.
fn icon_label(icon: Icon) -> &'static str {
    match icon {
        Icon::Backspace => "<x",
        Icon::Uppercase => "^",
        Icon::Lowercase => "v",
        Icon::Letters => "abc",
        Icon::Numbers => "123",
        Icon::Spacebar => "[ space ]",
    }
}

impl Canvas for CellCanvas {
    fn clear(&mut self, color: Rgba) {
        self.buffer.fill(color);
    }

    fn draw_char(&mut self, x: Coord, y: Coord, c: char, color: Rgba) {
        if let (Some(cx), Some(cy)) = (self.col(x), self.line(y)) {
            self.buffer.set_char(cx, cy, c, color, Attr::NONE);
        }
    }

    fn draw_icon(&mut self, x: Coord, y: Coord, icon: Icon, color: Rgba) {
        if let (Some(cx), Some(cy)) = (self.col(x), self.line(y)) {
            self.buffer.set_text(cx, cy, icon_label(icon), color, Attr::BOLD);
        }
    }

    fn fill_rect(&mut self, x: Coord, y: Coord, width: Coord, height: Coord, color: Rgba) {
        let x0 = x.max(0) / self.scale_x;
        let y0 = y.max(0) / self.scale_y;
        let x1 = (x + width).max(0) / self.scale_x;
        let y1 = (y + height).max(0) / self.scale_y;
        // A rect thinner than one cell still covers the cell it starts in.
        let w = (x1 - x0).max(1);
        let h = (y1 - y0).max(1);
        self.buffer
            .fill_rect(to_cell(x0), to_cell(y0), to_cell(w), to_cell(h), color);
    }

    fn draw_text(&mut self, x: Coord, y: Coord, text: &str, align: Align, color: Rgba) {
        let Some(cy) = self.line(y) else {
            return;
        };
        let mut col = x / self.scale_x;
        if align == Align::Centered {
            col -= text.width() as Coord / 2;
        }
        if col < 0 {
            return;
        }
        self.buffer.set_text(to_cell(col), cy, text, color, Attr::BOLD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_bounds() {
        let mut buf = FrameBuffer::new(4, 2);
        assert!(buf.get(3, 1).is_some());
        assert!(buf.get(4, 0).is_none());
        buf.set_char(10, 10, 'x', Rgba::BLACK, Attr::NONE);
        assert_eq!(buf.row_text(0), "    ");
    }

    #[test]
    fn test_buffer_set_text_clips() {
        let mut buf = FrameBuffer::new(4, 1);
        buf.set_text(2, 0, "abcdef", Rgba::BLACK, Attr::NONE);
        assert_eq!(buf.row_text(0), "  ab");
    }

    #[test]
    fn test_buffer_fill_rect_keeps_chars() {
        let mut buf = FrameBuffer::new(4, 2);
        buf.set_char(1, 0, 'q', Rgba::BLACK, Attr::NONE);
        buf.fill_rect(0, 0, 2, 1, Rgba::GRAY);
        let cell = buf.get(1, 0).unwrap();
        assert_eq!(cell.ch, 'q');
        assert_eq!(cell.bg, Rgba::GRAY);
        assert_eq!(buf.get(2, 0).unwrap().bg, Rgba::WHITE);
    }

    #[test]
    fn test_canvas_scales_pixels() {
        let mut canvas = CellCanvas::for_pixels(315, 170, 5, 10);
        assert_eq!(canvas.buffer().width(), 63);
        assert_eq!(canvas.buffer().height(), 17);

        canvas.draw_char(15, 15, 'q', Rgba::BLACK);
        assert_eq!(canvas.buffer().get(3, 1).unwrap().ch, 'q');
    }

    #[test]
    fn test_canvas_centered_text() {
        let mut canvas = CellCanvas::new(20, 2, 1, 1);
        canvas.draw_text(10, 0, "ENTER", Align::Centered, Rgba::BLACK);
        assert_eq!(canvas.buffer().row_text(0), "        ENTER       ");
    }

    #[test]
    fn test_canvas_negative_coords_ignored() {
        let mut canvas = CellCanvas::new(4, 1, 1, 1);
        canvas.draw_char(-1, 0, 'x', Rgba::BLACK);
        canvas.draw_icon(0, -3, Icon::Letters, Rgba::BLACK);
        assert_eq!(canvas.buffer().row_text(0), "    ");
    }

    #[test]
    fn test_canvas_clear_and_rect() {
        let mut canvas = CellCanvas::new(10, 4, 5, 10);
        canvas.clear(Rgba::rgb(0xE0, 0xE0, 0xE0));
        canvas.fill_rect(10, 10, 20, 25, Rgba::GRAY);
        let buf = canvas.buffer();
        assert_eq!(buf.get(2, 1).unwrap().bg, Rgba::GRAY);
        assert_eq!(buf.get(5, 2).unwrap().bg, Rgba::GRAY);
        assert_eq!(buf.get(6, 1).unwrap().bg, Rgba::rgb(0xE0, 0xE0, 0xE0));
        assert_eq!(buf.get(2, 3).unwrap().bg, Rgba::rgb(0xE0, 0xE0, 0xE0));
    }
}
