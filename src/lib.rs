//! # spark-keyboard
//!
//! On-screen text keyboard for touchscreen devices.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals): the
//! active layout, the repaint request and visibility are signals a host can
//! derive from.
//!
//! ## Architecture
//!
//! A touch release is resolved against the active layout, then applied to the
//! bound text field:
//! ```text
//! TouchEvent → hit_test(layout, x, y) → KeyToken → Edit on FieldBuffer + Cursor
//! ```
//! Painting walks the same rows with the same widths, so the keys drawn are
//! the keys touched.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Coord, Rgba, Cell)
//! - [`layout`] - Key tokens, layout tables, row walking and hit-testing
//! - [`text`] - Bound field contract, capacity-bounded buffer, cursor, glyph metrics
//! - [`keyboard`] - The [`TextKeyboard`] widget
//! - [`renderer`] - Canvas contract, cell canvas and terminal preview output
//! - [`input`] - Touch events and terminal mouse conversion
//! - [`config`] - Colors and labels

pub mod config;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod renderer;
pub mod text;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::KeyboardConfig;

pub use keyboard::{DisableHandler, Edit, KeyPressHandler, TextKeyboard};

pub use layout::{
    hit_test, row_at, walk_row, ControlKey, KeyToken, Layout, LayoutId, KEYBOARD_HEIGHT,
};

pub use text::{CellMetrics, Cursor, FieldBuffer, FixedPitch, GlyphMetrics, TextEdit, TextField, WidthTable};

pub use renderer::{Align, Canvas, CellCanvas, DiffRenderer, DrawOp, FrameBuffer, Icon, RecordingCanvas};

pub use input::{CellMapping, InputEvent, TouchEvent, TouchPhase};
