//! Glyph metrics.
//!
//! The keyboard needs exactly one thing from the font: how many pixels a
//! character advances the pen. Hit-test, paint and cursor bookkeeping all go
//! through [`GlyphMetrics::char_width`], so an implementation must be pure
//! and deterministic or the cursor position will drift.

use std::collections::HashMap;

use unicode_width::UnicodeWidthChar;

use crate::types::Coord;

/// Source of per-character advance widths for the field font.
pub trait GlyphMetrics {
    /// Advance width of `c` in pixels.
    fn char_width(&self, c: char) -> Coord;

    /// Sum of the advance widths of every character in `chars`.
    fn text_width<I>(&self, chars: I) -> Coord
    where
        I: IntoIterator<Item = char>,
        Self: Sized,
    {
        chars.into_iter().map(|c| self.char_width(c)).sum()
    }
}

impl<M: GlyphMetrics + ?Sized> GlyphMetrics for &M {
    fn char_width(&self, c: char) -> Coord {
        (**self).char_width(c)
    }
}

// =============================================================================
// FIXED PITCH
// =============================================================================

/// Monospace font: every character has the same advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPitch(pub Coord);

impl GlyphMetrics for FixedPitch {
    #[inline]
    fn char_width(&self, _c: char) -> Coord {
        self.0
    }
}

// =============================================================================
// WIDTH TABLE
// =============================================================================

/// Proportional bitmap font described by an explicit width table.
///
/// Characters missing from the table advance by the fallback width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthTable {
    widths: HashMap<char, Coord>,
    fallback: Coord,
}

impl WidthTable {
    /// Create an empty table where every character advances by `fallback`.
    pub fn new(fallback: Coord) -> Self {
        Self {
            widths: HashMap::new(),
            fallback,
        }
    }

    /// Set the width of one character.
    pub fn with(mut self, c: char, width: Coord) -> Self {
        self.widths.insert(c, width);
        self
    }

    /// Set the same width for every character of `chars`.
    pub fn with_all(mut self, chars: &str, width: Coord) -> Self {
        for c in chars.chars() {
            self.widths.insert(c, width);
        }
        self
    }

    /// A small proportional font similar to the device's standard font.
    pub fn standard() -> Self {
        Self::new(7)
            .with_all("il.,:;'!|", 3)
            .with_all("fjrt()[]", 5)
            .with(' ', 4)
            .with_all("mwMW", 10)
            .with_all("ABCDEFGHKNOPQRSUVXYZ", 8)
    }
}

impl GlyphMetrics for WidthTable {
    fn char_width(&self, c: char) -> Coord {
        self.widths.get(&c).copied().unwrap_or(self.fallback)
    }
}

// =============================================================================
// TERMINAL CELLS
// =============================================================================

/// Display width in terminal columns scaled to pixels.
///
/// Wide characters (CJK, most emoji) take two columns, combining marks and
/// control characters take none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    /// Pixels per terminal column.
    pub cell_width: Coord,
}

impl CellMetrics {
    pub fn new(cell_width: Coord) -> Self {
        Self { cell_width }
    }
}

impl GlyphMetrics for CellMetrics {
    fn char_width(&self, c: char) -> Coord {
        c.width().unwrap_or(0) as Coord * self.cell_width
    }
}
