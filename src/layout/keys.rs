//! Key tokens and their width classes.
//!
//! A row of the keyboard is a sequence of [`KeyToken`]s. Every token has a
//! fixed pixel width determined only by its kind, and both painting and
//! hit-testing read widths from [`KeyToken::width`] so they can never drift.

use crate::types::Coord;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Total height of the keyboard widget (4 rows of [`ROW_PITCH`]).
pub const KEYBOARD_HEIGHT: Coord = 160;

/// Vertical distance between two rows.
pub const ROW_PITCH: Coord = 40;

/// Number of rows in every layout.
pub const ROW_COUNT: usize = 4;

/// Top margin subtracted from touch y before row selection.
pub const TOUCH_TOP_MARGIN: Coord = 5;

/// Top margin of the first painted row.
pub const PAINT_TOP_MARGIN: Coord = 15;

/// Left margin of every painted row.
pub const PAINT_LEFT_MARGIN: Coord = 15;

/// Width of a blank indent token.
pub const BLANK_WIDTH: Coord = 15;

/// Width of a literal character key.
pub const CHAR_WIDTH: Coord = 30;

/// Width of the space bar.
pub const SPACE_WIDTH: Coord = 135;

/// Width of the enter key.
pub const ENTER_WIDTH: Coord = 80;

/// Width of a control key (backspace, shift, layout switch).
pub const CONTROL_WIDTH: Coord = 45;

/// Height of the filled enter key background.
pub const ENTER_HEIGHT: Coord = 25;

// =============================================================================
// TOKENS
// =============================================================================

/// Control keys that edit the buffer or switch the active layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// Delete the character before the cursor.
    Backspace,
    /// Switch to the uppercase letter layout.
    SetUppercase,
    /// Switch to the lowercase letter layout.
    SetLowercase,
    /// Switch back to letters from the numbers layout.
    SetLetters,
    /// Switch to the numbers layout.
    SetNumbers,
}

/// One entry of a keyboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    /// Literal key inserting its character.
    Char(char),
    /// Visual indent with no key behind it.
    Blank,
    /// Space bar, inserts `' '`.
    Space,
    /// Commits the edit and closes the keyboard.
    Enter,
    /// Control key.
    Control(ControlKey),
}

impl KeyToken {
    /// Pixel width consumed by this token in its row.
    #[inline]
    pub const fn width(&self) -> Coord {
        match self {
            Self::Blank => BLANK_WIDTH,
            Self::Char(_) => CHAR_WIDTH,
            Self::Space => SPACE_WIDTH,
            Self::Enter => ENTER_WIDTH,
            Self::Control(_) => CONTROL_WIDTH,
        }
    }

    /// Whether a touch can land on this token.
    ///
    /// Blanks are pure indentation: a touch inside one falls through to the
    /// next key in the row.
    #[inline]
    pub const fn is_key(&self) -> bool {
        !matches!(self, Self::Blank)
    }

    /// Character inserted into the field when this key is hit, if any.
    #[inline]
    pub const fn insert_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::Space => Some(' '),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_classes() {
        assert_eq!(KeyToken::Blank.width(), 15);
        assert_eq!(KeyToken::Char('q').width(), 30);
        assert_eq!(KeyToken::Space.width(), 135);
        assert_eq!(KeyToken::Enter.width(), 80);
        assert_eq!(KeyToken::Control(ControlKey::Backspace).width(), 45);
    }

    #[test]
    fn test_insert_char() {
        assert_eq!(KeyToken::Char('x').insert_char(), Some('x'));
        assert_eq!(KeyToken::Space.insert_char(), Some(' '));
        assert_eq!(KeyToken::Enter.insert_char(), None);
        assert_eq!(KeyToken::Blank.insert_char(), None);
        assert_eq!(KeyToken::Control(ControlKey::SetNumbers).insert_char(), None);
    }

    #[test]
    fn test_blank_is_not_a_key() {
        assert!(!KeyToken::Blank.is_key());
        assert!(KeyToken::Space.is_key());
    }

    #[test]
    fn test_height_covers_rows() {
        assert_eq!(KEYBOARD_HEIGHT, ROW_PITCH * ROW_COUNT as Coord);
    }
}
