//! Edit cursor.
//!
//! The cursor is a character index into the bound field plus the pixel x at
//! which it is drawn. The pixel position is always the summed advance of the
//! characters before the index; every edit below updates both together.

use super::field::FieldBuffer;
use super::metrics::GlyphMetrics;
use crate::types::Coord;

/// Cursor index and rendered position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: usize,
    pos: Coord,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character offset into the field content.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pixel x of the cursor relative to the start of the text.
    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    /// Insert `c` before the cursor and step over it.
    ///
    /// Returns `false` when the buffer is full; nothing changes then.
    pub fn insert(&mut self, buffer: &mut FieldBuffer, c: char, metrics: &dyn GlyphMetrics) -> bool {
        if !buffer.insert(self.index, c) {
            return false;
        }
        self.index += 1;
        self.pos += metrics.char_width(c);
        true
    }

    /// Delete the character before the cursor.
    ///
    /// At the start of the buffer this is a no-op and returns `None`.
    pub fn backspace(&mut self, buffer: &mut FieldBuffer, metrics: &dyn GlyphMetrics) -> Option<char> {
        if self.index == 0 {
            return None;
        }
        let removed = buffer.remove(self.index - 1)?;
        self.index -= 1;
        self.pos -= metrics.char_width(removed);
        Some(removed)
    }

    /// Place the cursor at the glyph boundary nearest to the left of `x`.
    ///
    /// Walks the content from the start and stops before the first
    /// character that does not fit in what is left of `x`. The resulting
    /// position is snapped to that boundary, not the raw `x`.
    pub fn locate(&mut self, buffer: &FieldBuffer, x: Coord, metrics: &dyn GlyphMetrics) {
        let mut rest = x;
        let mut index = 0;
        for c in buffer.chars() {
            let w = metrics.char_width(c);
            if rest < w {
                break;
            }
            rest -= w;
            index += 1;
        }
        self.index = index;
        self.pos = x - rest;
    }

    /// Place the cursor after the last character.
    pub fn move_to_end(&mut self, buffer: &FieldBuffer, metrics: &dyn GlyphMetrics) {
        self.index = buffer.len();
        self.recompute(buffer, metrics);
    }

    /// Re-derive the pixel position from the content.
    ///
    /// Clamps the index first in case the content shrank underneath.
    pub fn recompute(&mut self, buffer: &FieldBuffer, metrics: &dyn GlyphMetrics) {
        self.index = self.index.min(buffer.len());
        self.pos = buffer.as_chars()[..self.index]
            .iter()
            .map(|&c| metrics.char_width(c))
            .sum();
    }

    /// Reset to the start of the text.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::metrics::{FixedPitch, WidthTable};

    fn metrics() -> WidthTable {
        WidthTable::new(7).with('i', 3).with('m', 10)
    }

    #[test]
    fn test_insert_advances_by_glyph_width() {
        let m = metrics();
        let mut buffer = FieldBuffer::new(10);
        let mut cursor = Cursor::new();

        assert!(cursor.insert(&mut buffer, 'i', &m));
        assert!(cursor.insert(&mut buffer, 'm', &m));
        assert_eq!(buffer.to_string(), "im");
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.pos(), 13);
    }

    #[test]
    fn test_insert_in_middle() {
        let m = metrics();
        let mut buffer = FieldBuffer::with_text(10, "ac");
        let mut cursor = Cursor::new();
        cursor.locate(&buffer, 7, &m);
        assert_eq!(cursor.index(), 1);

        assert!(cursor.insert(&mut buffer, 'b', &m));
        assert_eq!(buffer.to_string(), "abc");
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.pos(), 14);
    }

    #[test]
    fn test_insert_full_is_dropped() {
        let m = metrics();
        let mut buffer = FieldBuffer::with_text(3, "ab");
        let mut cursor = Cursor::new();
        cursor.move_to_end(&buffer, &m);
        let before = cursor;

        assert!(!cursor.insert(&mut buffer, 'c', &m));
        assert_eq!(cursor, before);
        assert_eq!(buffer.to_string(), "ab");
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let m = metrics();
        let mut buffer = FieldBuffer::with_text(10, "mix");
        let mut cursor = Cursor::new();
        cursor.locate(&buffer, 13, &m);
        assert_eq!(cursor.index(), 2);

        assert_eq!(cursor.backspace(&mut buffer, &m), Some('i'));
        assert_eq!(buffer.to_string(), "mx");
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.pos(), 10);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let m = metrics();
        let mut buffer = FieldBuffer::with_text(10, "abc");
        let mut cursor = Cursor::new();

        assert_eq!(cursor.backspace(&mut buffer, &m), None);
        assert_eq!(buffer.to_string(), "abc");
        assert_eq!(cursor, Cursor::new());
    }

    #[test]
    fn test_locate_snaps_to_glyph_boundary() {
        let m = FixedPitch(10);
        let buffer = FieldBuffer::with_text(10, "abcd");
        let mut cursor = Cursor::new();

        cursor.locate(&buffer, 25, &m);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.pos(), 20);

        cursor.locate(&buffer, 30, &m);
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.pos(), 30);

        cursor.locate(&buffer, 9, &m);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_locate_past_end_stops_at_content_end() {
        let m = FixedPitch(10);
        let buffer = FieldBuffer::with_text(10, "ab");
        let mut cursor = Cursor::new();

        cursor.locate(&buffer, 95, &m);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.pos(), 20);
    }

    #[test]
    fn test_recompute_clamps_index() {
        let m = FixedPitch(5);
        let mut buffer = FieldBuffer::with_text(10, "abcdef");
        let mut cursor = Cursor::new();
        cursor.move_to_end(&buffer, &m);
        assert_eq!(cursor.pos(), 30);

        buffer.set_text("ab");
        cursor.recompute(&buffer, &m);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.pos(), 10);
    }
}
