//! Keyboard Layout Module
//!
//! Static key layouts and the geometry shared by paint and hit-test.
//!
//! # Architecture
//!
//! - [`keys`] - Key tokens, control keys, width classes, geometry constants
//! - [`table`] - The uppercase, lowercase and numbers layouts
//! - [`walk`] - Row walking, row selection and hit-testing
//!
//! Positions are never stored. Every consumer walks the row again through
//! [`walk_row`], so what is painted is exactly what is touched.
//!
//! # Example
//!
//! ```ignore
//! use spark_keyboard::layout::{hit_test, KeyToken, LayoutId};
//!
//! let key = hit_test(LayoutId::Lowercase.layout(), 95, 10);
//! assert_eq!(key, Some(KeyToken::Char('r')));
//! ```

pub mod keys;
pub mod table;
pub mod walk;

pub use keys::*;
pub use table::{Layout, LayoutId, LOWERCASE, NUMBERS, UPPERCASE};
pub use walk::{hit_test, key_in_row, row_at, row_width, walk_row, PlacedKey, RowWalk};
