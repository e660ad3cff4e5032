//! Touch resolution and field editing.

use tracing::{debug, trace};

use super::TextKeyboard;
use crate::layout::{hit_test, ControlKey, KeyToken};
use crate::types::Coord;

bitflags::bitflags! {
    /// What a touch did.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Edit: u8 {
        /// A field was bound and the touch was processed.
        const HANDLED = 1 << 0;
        /// A character was inserted.
        const INSERTED = 1 << 1;
        /// A character was deleted.
        const DELETED = 1 << 2;
        /// The active layout changed.
        const LAYOUT = 1 << 3;
        /// Enter was hit; the keyboard closed with commit.
        const COMMITTED = 1 << 4;
        /// A character was hit but the field was full.
        const DROPPED = 1 << 5;
    }
}

impl TextKeyboard<'_> {
    /// Key under `(x, y)` on the active layout, without acting on it.
    ///
    /// `y` must lie within the keyboard; rows below the last one resolve to
    /// `None`.
    pub fn key_at(&self, x: Coord, y: Coord) -> Option<KeyToken> {
        hit_test(self.layout(), x, y)
    }

    /// Handle a touch release at `(x, y)` in keyboard coordinates.
    ///
    /// Does nothing and returns an empty [`Edit`] when no field is bound.
    pub fn on_touch_end(&mut self, x: Coord, y: Coord) -> Edit {
        if self.field.is_none() {
            return Edit::empty();
        }

        if let Some(handler) = self.on_key_press.as_mut() {
            handler();
        }

        let key = self.key_at(x, y);
        trace!(x, y, ?key, "touch resolved");

        let mut edit = Edit::HANDLED;
        let mut pending = None;
        match key {
            None => {}
            Some(KeyToken::Enter) => {
                self.disable(true);
                return edit | Edit::COMMITTED;
            }
            Some(KeyToken::Control(ControlKey::Backspace)) => {
                if let Some(field) = self.field.as_deref_mut() {
                    let removed = self.cursor.backspace(field.buffer_mut(), &*self.metrics);
                    if removed.is_some() {
                        edit |= Edit::DELETED;
                    }
                }
            }
            Some(KeyToken::Control(control)) => {
                if let Some(layout) = control.target_layout() {
                    self.set_layout(layout);
                    edit |= Edit::LAYOUT;
                }
            }
            Some(token) => pending = token.insert_char(),
        }

        let Some(field) = self.field.as_deref_mut() else {
            return edit;
        };
        if let Some(c) = pending {
            if self.cursor.insert(field.buffer_mut(), c, &*self.metrics) {
                edit |= Edit::INSERTED;
            } else {
                debug!(
                    ch = %c,
                    capacity = field.max_length(),
                    "field full, insert dropped"
                );
                edit |= Edit::DROPPED;
            }
        }
        field.invalidate();
        edit
    }

    /// Move the cursor to the glyph boundary at or left of `x`.
    ///
    /// Used when the field itself is tapped. `x` is relative to the start of
    /// the field text.
    pub fn set_cursor_pos(&mut self, x: Coord) {
        let Some(field) = self.field.as_deref_mut() else {
            return;
        };
        self.cursor.locate(field.buffer(), x, &*self.metrics);
        field.invalidate();
    }
}
