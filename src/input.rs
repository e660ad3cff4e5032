//! Input Module - Touch events and terminal event conversion
//!
//! The keyboard reacts to touch releases in its own pixel space. On the
//! device those come from the touch controller; in the terminal preview
//! they are synthesized from crossterm mouse events.
//!
//! # API
//!
//! - `TouchEvent` - A touch in keyboard pixel coordinates
//! - `CellMapping` - Terminal cell to keyboard pixel conversion
//! - `convert_mouse_event` - crossterm MouseEvent to TouchEvent
//! - `poll_event` / `read_event` - Read terminal events as InputEvents
//! - `convert_event` - Any crossterm event to an InputEvent
//! - `route_event` - Feed an event to a keyboard
//!
//! # Example
//!
//! ```ignore
//! use spark_keyboard::input::{poll_event, route_event, CellMapping};
//! use std::time::Duration;
//!
//! let mapping = CellMapping::new(0, 2, 5, 10);
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16), &mapping) {
//!         route_event(&mut keyboard, event);
//!     }
//! }
//! ```

use std::time::Duration;

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    MouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
};

use crate::keyboard::{Edit, TextKeyboard};
use crate::types::Coord;

// =============================================================================
// TOUCH EVENTS
// =============================================================================

/// Touch phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// A touch in keyboard pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: Coord,
    pub y: Coord,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: Coord, y: Coord) -> Self {
        Self { phase, x, y }
    }

    /// Create a touch release event
    pub fn end(x: Coord, y: Coord) -> Self {
        Self::new(TouchPhase::End, x, y)
    }
}

/// Unified event type for the preview loop
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Touch synthesized from the mouse
    Touch(TouchEvent),
    /// Physical key press
    Key(KeyCode),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// CELL MAPPING
// =============================================================================

/// Where the keyboard sits on the terminal and how big a cell is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMapping {
    /// Terminal column of the keyboard's left edge.
    pub origin_col: u16,
    /// Terminal row of the keyboard's top edge.
    pub origin_row: u16,
    /// Pixels per column.
    pub scale_x: Coord,
    /// Pixels per row.
    pub scale_y: Coord,
}

impl CellMapping {
    pub fn new(origin_col: u16, origin_row: u16, scale_x: Coord, scale_y: Coord) -> Self {
        Self {
            origin_col,
            origin_row,
            scale_x: scale_x.max(1),
            scale_y: scale_y.max(1),
        }
    }

    /// Pixel at the center of a terminal cell, or `None` left of or above
    /// the keyboard.
    pub fn to_pixels(&self, col: u16, row: u16) -> Option<(Coord, Coord)> {
        let dx = col.checked_sub(self.origin_col)? as Coord;
        let dy = row.checked_sub(self.origin_row)? as Coord;
        Some((
            dx * self.scale_x + self.scale_x / 2,
            dy * self.scale_y + self.scale_y / 2,
        ))
    }
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm mouse event into a touch.
///
/// Only the left button counts as a finger. Events outside the keyboard
/// origin are dropped.
pub fn convert_mouse_event(event: CrosstermMouseEvent, mapping: &CellMapping) -> Option<TouchEvent> {
    let phase = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => TouchPhase::Start,
        MouseEventKind::Drag(MouseButton::Left) => TouchPhase::Move,
        MouseEventKind::Up(MouseButton::Left) => TouchPhase::End,
        _ => return None,
    };
    let (x, y) = mapping.to_pixels(event.column, event.row)?;
    Some(TouchEvent::new(phase, x, y))
}

/// Convert a crossterm key event, ignoring releases and repeats.
fn convert_key_event(event: CrosstermKeyEvent) -> InputEvent {
    match event.kind {
        KeyEventKind::Press => InputEvent::Key(event.code),
        _ => InputEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration, mapping: &CellMapping) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event(mapping)?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event(mapping: &CellMapping) -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?, mapping))
}

/// Convert any crossterm event.
pub fn convert_event(event: CrosstermEvent, mapping: &CellMapping) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse, mapping)
            .map(InputEvent::Touch)
            .unwrap_or(InputEvent::None),
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Feed an event to the keyboard.
///
/// Touch releases go to [`TextKeyboard::on_touch_end`]; everything else is
/// left to the caller and yields an empty [`Edit`].
pub fn route_event(keyboard: &mut TextKeyboard<'_>, event: InputEvent) -> Edit {
    match event {
        InputEvent::Touch(touch) if touch.phase == TouchPhase::End => {
            keyboard.on_touch_end(touch.x, touch.y)
        }
        _ => Edit::empty(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
