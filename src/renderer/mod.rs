//! Renderer Module - Drawing surfaces for the keyboard
//!
//! - [`canvas`] - The [`Canvas`] contract and a recording implementation
//! - [`buffer`] - Cell frame buffer and the pixel-to-cell canvas
//! - [`terminal`] - Differential crossterm output for the terminal preview

pub mod buffer;
pub mod canvas;
pub mod terminal;

pub use buffer::{CellCanvas, FrameBuffer};
pub use canvas::{Align, Canvas, DrawOp, Icon, RecordingCanvas};
pub use terminal::DiffRenderer;
