//! Drawing surface contract.
//!
//! The keyboard never touches pixels. It describes what to draw through
//! [`Canvas`], and the host supplies an implementation backed by its display
//! driver. Icons are named, not decoded: mapping an [`Icon`] to a bitmap is
//! the canvas's business.

use crate::layout::ControlKey;
use crate::types::{Coord, Rgba};

/// Pre-rendered key icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Backspace,
    Uppercase,
    Lowercase,
    Letters,
    Numbers,
    Spacebar,
}

impl Icon {
    /// Icon drawn for a control key.
    pub const fn for_control(key: ControlKey) -> Self {
        match key {
            ControlKey::Backspace => Self::Backspace,
            ControlKey::SetUppercase => Self::Uppercase,
            ControlKey::SetLowercase => Self::Lowercase,
            ControlKey::SetLetters => Self::Letters,
            ControlKey::SetNumbers => Self::Numbers,
        }
    }
}

/// Horizontal anchoring of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// `x` is the left edge of the text.
    #[default]
    Left,
    /// `x` is the center of the text.
    Centered,
}

/// Rendering services the keyboard paints through.
pub trait Canvas {
    /// Fill the whole surface.
    fn clear(&mut self, color: Rgba);

    /// Draw a single glyph with its top-left corner at `(x, y)`.
    fn draw_char(&mut self, x: Coord, y: Coord, c: char, color: Rgba);

    /// Draw an icon bitmap with its top-left corner at `(x, y)`.
    fn draw_icon(&mut self, x: Coord, y: Coord, icon: Icon, color: Rgba);

    /// Fill a rectangle.
    fn fill_rect(&mut self, x: Coord, y: Coord, width: Coord, height: Coord, color: Rgba);

    /// Draw a text label.
    fn draw_text(&mut self, x: Coord, y: Coord, text: &str, align: Align, color: Rgba);
}

// =============================================================================
// RECORDING CANVAS
// =============================================================================

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Rgba),
    Char { x: Coord, y: Coord, c: char, color: Rgba },
    Icon { x: Coord, y: Coord, icon: Icon, color: Rgba },
    Rect { x: Coord, y: Coord, width: Coord, height: Coord, color: Rgba },
    Text { x: Coord, y: Coord, text: String, align: Align, color: Rgba },
}

impl DrawOp {
    /// Top-left x of the operation, `None` for a clear.
    pub fn x(&self) -> Option<Coord> {
        match self {
            Self::Clear(_) => None,
            Self::Char { x, .. }
            | Self::Icon { x, .. }
            | Self::Rect { x, .. }
            | Self::Text { x, .. } => Some(*x),
        }
    }
}

/// Canvas that records draw calls instead of drawing.
///
/// Used by tests and by hosts that replay the keyboard onto another surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the canvas empty.
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn draw_char(&mut self, x: Coord, y: Coord, c: char, color: Rgba) {
        self.ops.push(DrawOp::Char { x, y, c, color });
    }

    fn draw_icon(&mut self, x: Coord, y: Coord, icon: Icon, color: Rgba) {
        self.ops.push(DrawOp::Icon { x, y, icon, color });
    }

    fn fill_rect(&mut self, x: Coord, y: Coord, width: Coord, height: Coord, color: Rgba) {
        self.ops.push(DrawOp::Rect { x, y, width, height, color });
    }

    fn draw_text(&mut self, x: Coord, y: Coord, text: &str, align: Align, color: Rgba) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            align,
            color,
        });
    }
}
