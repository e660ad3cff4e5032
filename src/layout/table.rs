//! Keyboard layout table.
//!
//! Three immutable layouts, each exactly [`ROW_COUNT`] rows. The active
//! layout is selected by [`LayoutId`]; the tables themselves are statics and
//! are never copied.

use super::keys::ControlKey::{Backspace, SetLetters, SetLowercase, SetNumbers, SetUppercase};
use super::keys::KeyToken::{Blank, Char, Control, Enter, Space};
use super::keys::{ControlKey, KeyToken, ROW_COUNT};

// =============================================================================
// TYPES
// =============================================================================

/// A keyboard layout: a fixed number of rows of key tokens.
#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    rows: [&'static [KeyToken]; ROW_COUNT],
}

impl Layout {
    /// All rows, top to bottom.
    pub fn rows(&self) -> &[&'static [KeyToken]; ROW_COUNT] {
        &self.rows
    }

    /// A single row, or `None` past the last row.
    pub fn row(&self, index: usize) -> Option<&'static [KeyToken]> {
        self.rows.get(index).copied()
    }
}

/// Identifies one of the built-in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutId {
    Uppercase,
    #[default]
    Lowercase,
    Numbers,
}

impl LayoutId {
    /// The static layout table for this id.
    pub fn layout(self) -> &'static Layout {
        match self {
            Self::Uppercase => &UPPERCASE,
            Self::Lowercase => &LOWERCASE,
            Self::Numbers => &NUMBERS,
        }
    }
}

impl ControlKey {
    /// Layout selected by this key, or `None` for backspace.
    pub const fn target_layout(self) -> Option<LayoutId> {
        match self {
            Backspace => None,
            SetUppercase => Some(LayoutId::Uppercase),
            SetLowercase => Some(LayoutId::Lowercase),
            SetLetters => Some(LayoutId::Lowercase),
            SetNumbers => Some(LayoutId::Numbers),
        }
    }
}

// =============================================================================
// TABLES
// =============================================================================

const BOTTOM_LETTERS: &[KeyToken] = &[Control(SetNumbers), Space, Enter];
const BOTTOM_NUMBERS: &[KeyToken] = &[Control(SetLetters), Space, Enter];

/// Lowercase letters. Active when the keyboard is created.
pub static LOWERCASE: Layout = Layout {
    rows: [
        &[
            Char('q'), Char('w'), Char('e'), Char('r'), Char('t'),
            Char('y'), Char('u'), Char('i'), Char('o'), Char('p'),
        ],
        &[
            Blank, Char('a'), Char('s'), Char('d'), Char('f'),
            Char('g'), Char('h'), Char('j'), Char('k'), Char('l'),
        ],
        &[
            Control(SetUppercase), Char('z'), Char('x'), Char('c'), Char('v'),
            Char('b'), Char('n'), Char('m'), Control(Backspace),
        ],
        BOTTOM_LETTERS,
    ],
};

/// Uppercase letters.
pub static UPPERCASE: Layout = Layout {
    rows: [
        &[
            Char('Q'), Char('W'), Char('E'), Char('R'), Char('T'),
            Char('Y'), Char('U'), Char('I'), Char('O'), Char('P'),
        ],
        &[
            Blank, Char('A'), Char('S'), Char('D'), Char('F'),
            Char('G'), Char('H'), Char('J'), Char('K'), Char('L'),
        ],
        &[
            Control(SetLowercase), Char('Z'), Char('X'), Char('C'), Char('V'),
            Char('B'), Char('N'), Char('M'), Control(Backspace),
        ],
        BOTTOM_LETTERS,
    ],
};

/// Digits and the two punctuation keys.
///
/// Backspace sits at the same x as in the letter layouts: 17 blanks span
/// 255px, the shift key plus seven letters.
pub static NUMBERS: Layout = Layout {
    rows: [
        &[
            Char('1'), Char('2'), Char('3'), Char('4'), Char('5'),
            Char('6'), Char('7'), Char('8'), Char('9'), Char('0'),
        ],
        &[Char('_'), Char('-')],
        &[
            Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank,
            Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank,
            Control(Backspace),
        ],
        BOTTOM_NUMBERS,
    ],
};
