//! Row walking and hit-testing.
//!
//! [`walk_row`] is the single source of key positions. Paint iterates it to
//! place glyphs, [`hit_test`] iterates it to find the key under a touch.

use super::keys::{KeyToken, ROW_PITCH, TOUCH_TOP_MARGIN};
use super::table::Layout;
use crate::types::Coord;

/// A token placed in its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedKey {
    /// Offset of the token's left edge from the start of the row.
    pub offset: Coord,
    /// Width consumed by the token.
    pub width: Coord,
    pub token: KeyToken,
}

impl PlacedKey {
    /// Offset of the token's right edge from the start of the row.
    #[inline]
    pub fn end(&self) -> Coord {
        self.offset + self.width
    }
}

/// Iterator over the tokens of a row with their accumulated offsets.
#[derive(Debug, Clone)]
pub struct RowWalk<'a> {
    tokens: std::slice::Iter<'a, KeyToken>,
    offset: Coord,
}

impl Iterator for RowWalk<'_> {
    type Item = PlacedKey;

    fn next(&mut self) -> Option<PlacedKey> {
        let token = *self.tokens.next()?;
        let placed = PlacedKey {
            offset: self.offset,
            width: token.width(),
            token,
        };
        self.offset += placed.width;
        Some(placed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

/// Walk a row left to right, accumulating token widths.
pub fn walk_row(row: &[KeyToken]) -> RowWalk<'_> {
    RowWalk {
        tokens: row.iter(),
        offset: 0,
    }
}

/// Row index under a touch at `y`.
///
/// There is no upper clamp: touches below the widget select a row that does
/// not exist, which [`Layout::row`] reports as `None`.
#[inline]
pub fn row_at(y: Coord) -> usize {
    ((y - TOUCH_TOP_MARGIN).max(0) / ROW_PITCH) as usize
}

/// Key under `x` within a row.
///
/// The first key whose right edge is at or past `x` wins. Blanks never win;
/// a touch inside an indent lands on the key after it. Returns `None` when
/// `x` is past the last key.
pub fn key_in_row(row: &[KeyToken], x: Coord) -> Option<KeyToken> {
    walk_row(row)
        .filter(|placed| placed.token.is_key())
        .find(|placed| x <= placed.end())
        .map(|placed| placed.token)
}

/// Key under the touch point `(x, y)` of `layout`.
pub fn hit_test(layout: &Layout, x: Coord, y: Coord) -> Option<KeyToken> {
    let row = layout.row(row_at(y))?;
    key_in_row(row, x)
}

/// Total width of a row.
pub fn row_width(row: &[KeyToken]) -> Coord {
    walk_row(row).last().map(|placed| placed.end()).unwrap_or(0)
}
