//! Text Module - Bound field and glyph metrics
//!
//! - [`field`] - The capacity-bounded buffer and the [`TextField`] contract
//! - [`metrics`] - Character advance widths used for cursor placement
//! - [`cursor`] - Cursor index and pixel position kept in lockstep

pub mod cursor;
pub mod field;
pub mod metrics;

pub use cursor::Cursor;
pub use field::{FieldBuffer, TextEdit, TextField};
pub use metrics::{CellMetrics, FixedPitch, GlyphMetrics, WidthTable};
