//! Text Keyboard - On-screen keyboard bound to a text field
//!
//! The keyboard owns its active layout and the edit cursor. It borrows the
//! field it edits for as long as editing lasts and never outlives that
//! borrow.
//!
//! # API
//!
//! - `show(field)` - Bind a field and start editing
//! - `on_touch_end(x, y)` - Resolve a touch release into an edit
//! - `set_cursor_pos(x)` - Move the cursor after a tap on the field itself
//! - `paint(canvas)` - Draw the active layout
//! - `disable(commit)` - Close the keyboard and release the field
//!
//! # Example
//!
//! ```ignore
//! use spark_keyboard::{TextEdit, TextKeyboard};
//!
//! let mut field = TextEdit::new(16);
//! let mut keyboard = TextKeyboard::new();
//! keyboard.on_disable(|commit| println!("closed, commit={commit}"));
//! keyboard.show(&mut field);
//!
//! keyboard.on_touch_end(95, 10); // types 'r'
//! ```

mod edit;
mod paint;

use spark_signals::{signal, Signal};
use tracing::debug;

use crate::config::KeyboardConfig;
use crate::layout::{Layout, LayoutId};
use crate::text::{Cursor, GlyphMetrics, TextField, WidthTable};
use crate::types::Coord;

pub use edit::Edit;

/// Called when the keyboard closes. The argument is `true` on commit.
pub type DisableHandler = Box<dyn FnMut(bool)>;

/// Called for every touch the keyboard handles, before it is resolved.
pub type KeyPressHandler = Box<dyn FnMut()>;

/// On-screen text keyboard.
///
/// `'f` is the lifetime of the field borrow. Every entry point is a no-op on
/// the field side while no field is bound; painting always works.
pub struct TextKeyboard<'f> {
    config: KeyboardConfig,
    metrics: Box<dyn GlyphMetrics>,
    field: Option<&'f mut dyn TextField>,
    cursor: Cursor,
    layout: Signal<LayoutId>,
    needs_repaint: Signal<bool>,
    visible: Signal<bool>,
    on_disable: Option<DisableHandler>,
    on_key_press: Option<KeyPressHandler>,
}

impl<'f> TextKeyboard<'f> {
    /// Create a hidden keyboard on the lowercase layout.
    pub fn new() -> Self {
        Self {
            config: KeyboardConfig::default(),
            metrics: Box::new(WidthTable::standard()),
            field: None,
            cursor: Cursor::new(),
            layout: signal(LayoutId::default()),
            needs_repaint: signal(true),
            visible: signal(false),
            on_disable: None,
            on_key_press: None,
        }
    }

    /// Replace the appearance.
    pub fn with_config(mut self, config: KeyboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the glyph metrics of the field font.
    pub fn with_metrics(mut self, metrics: impl GlyphMetrics + 'static) -> Self {
        self.set_metrics(metrics);
        self
    }

    /// Replace the glyph metrics of the field font.
    ///
    /// With a field bound, the cursor position is re-derived from the
    /// content under the new metrics and the field is invalidated.
    pub fn set_metrics(&mut self, metrics: impl GlyphMetrics + 'static) {
        self.metrics = Box::new(metrics);
        if let Some(field) = self.field.as_deref_mut() {
            self.cursor.recompute(field.buffer(), &*self.metrics);
            field.invalidate();
        }
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Bind `field` and start editing with the cursor after its content.
    ///
    /// A previously bound field is released first.
    pub fn show(&mut self, field: &'f mut dyn TextField) {
        self.cursor.move_to_end(field.buffer(), &*self.metrics);
        field.invalidate();
        debug!(
            len = field.buffer().len(),
            capacity = field.max_length(),
            "keyboard shown"
        );
        self.field = Some(field);
        self.visible.set(true);
        self.invalidate();
    }

    /// Release the field without closing the keyboard.
    pub fn detach(&mut self) {
        if self.field.take().is_some() {
            debug!("field detached");
        }
        self.cursor.reset();
    }

    /// Close the keyboard and release the field.
    ///
    /// `commit` tells the disable handler whether the edit was confirmed.
    pub fn disable(&mut self, commit: bool) {
        debug!(commit, "keyboard disabled");
        self.detach();
        self.visible.set(false);
        self.invalidate();
        if let Some(handler) = self.on_disable.as_mut() {
            handler(commit);
        }
    }

    /// Register the handler run when the keyboard closes.
    pub fn on_disable(&mut self, handler: impl FnMut(bool) + 'static) {
        self.on_disable = Some(Box::new(handler));
    }

    /// Register the key feedback handler (click sound, haptics).
    pub fn on_key_press(&mut self, handler: impl FnMut() + 'static) {
        self.on_key_press = Some(Box::new(handler));
    }

    // =========================================================================
    // STATE
    // =========================================================================

    /// Whether a field is bound.
    pub fn is_editing(&self) -> bool {
        self.field.is_some()
    }

    /// Whether the keyboard is shown.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// The bound field, if any.
    pub fn field(&self) -> Option<&dyn TextField> {
        self.field.as_deref()
    }

    /// Cursor index and pixel position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn cursor_pos(&self) -> Coord {
        self.cursor.pos()
    }

    /// The active layout table.
    pub fn layout(&self) -> &'static Layout {
        self.layout.get().layout()
    }

    pub fn layout_id(&self) -> LayoutId {
        self.layout.get()
    }

    /// Select a layout and request a repaint.
    pub fn set_layout(&mut self, id: LayoutId) {
        debug!(layout = ?id, "layout switched");
        self.layout.set(id);
        self.invalidate();
    }

    /// The active layout as a signal, for hosts deriving from it.
    pub fn layout_signal(&self) -> Signal<LayoutId> {
        self.layout.clone()
    }

    /// Whether the keyboard has changed since the last paint.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.get()
    }

    pub fn repaint_signal(&self) -> Signal<bool> {
        self.needs_repaint.clone()
    }

    pub fn visible_signal(&self) -> Signal<bool> {
        self.visible.clone()
    }

    /// Request a repaint of the keyboard.
    pub fn invalidate(&mut self) {
        self.needs_repaint.set(true);
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }
}

impl Default for TextKeyboard<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::text::{FixedPitch, TextEdit};

    #[test]
    fn test_new_keyboard_state() {
        let keyboard = TextKeyboard::new();
        assert_eq!(keyboard.layout_id(), LayoutId::Lowercase);
        assert!(!keyboard.is_editing());
        assert!(!keyboard.is_visible());
        assert_eq!(keyboard.cursor(), Cursor::new());
        assert_eq!(keyboard.config(), &KeyboardConfig::default());
    }

    #[test]
    fn test_show_places_cursor_at_end() {
        let mut field = TextEdit::with_text(16, "abc");
        let mut keyboard = TextKeyboard::new().with_metrics(FixedPitch(6));
        keyboard.show(&mut field);

        assert!(keyboard.is_editing());
        assert!(keyboard.is_visible());
        assert_eq!(keyboard.cursor_index(), 3);
        assert_eq!(keyboard.cursor_pos(), 18);
        assert_eq!(keyboard.field().map(|f| f.buffer().to_string()).as_deref(), Some("abc"));
    }

    #[test]
    fn test_disable_releases_field_and_notifies() {
        let closed = Rc::new(RefCell::new(Vec::new()));
        let mut field = TextEdit::new(16);
        let mut keyboard = TextKeyboard::new();
        keyboard.on_disable({
            let closed = closed.clone();
            move |commit| closed.borrow_mut().push(commit)
        });
        keyboard.show(&mut field);
        keyboard.disable(false);

        assert!(!keyboard.is_editing());
        assert!(!keyboard.is_visible());
        assert_eq!(*closed.borrow(), vec![false]);
    }

    #[test]
    fn test_detach_keeps_keyboard_visible() {
        let mut field = TextEdit::with_text(16, "abc");
        let mut keyboard = TextKeyboard::new();
        keyboard.show(&mut field);
        keyboard.detach();

        assert!(!keyboard.is_editing());
        assert!(keyboard.is_visible());
        assert_eq!(keyboard.cursor(), Cursor::new());
    }

    #[test]
    fn test_metrics_swap_rederives_cursor() {
        let mut field = TextEdit::with_text(16, "abc");
        let mut keyboard = TextKeyboard::new().with_metrics(FixedPitch(6));
        keyboard.show(&mut field);
        assert_eq!(keyboard.cursor_pos(), 18);

        keyboard = keyboard.with_metrics(FixedPitch(10));
        assert_eq!(keyboard.cursor_index(), 3);
        assert_eq!(keyboard.cursor_pos(), 30);

        keyboard.on_touch_end(280, 100); // backspace
        assert_eq!(keyboard.cursor_index(), 2);
        assert_eq!(keyboard.cursor_pos(), 20);
    }

    #[test]
    fn test_set_metrics_mid_text_invalidates_field() {
        let mut field = TextEdit::with_text(16, "abcd");
        let revision = field.revision_signal();
        let mut keyboard = TextKeyboard::new().with_metrics(FixedPitch(6));
        keyboard.show(&mut field);
        keyboard.set_cursor_pos(13);
        assert_eq!(keyboard.cursor_index(), 2);
        let before = revision.get();

        keyboard.set_metrics(FixedPitch(9));
        assert_eq!(keyboard.cursor_index(), 2);
        assert_eq!(keyboard.cursor_pos(), 18);
        assert_eq!(revision.get(), before + 1);
    }

    #[test]
    fn test_set_metrics_without_field() {
        let mut keyboard = TextKeyboard::new();
        keyboard.set_metrics(FixedPitch(9));
        assert_eq!(keyboard.cursor(), Cursor::new());
    }

    #[test]
    fn test_set_layout_requests_repaint() {
        let mut keyboard = TextKeyboard::new();
        keyboard.needs_repaint.set(false);
        keyboard.set_layout(LayoutId::Numbers);

        assert!(keyboard.needs_repaint());
        assert_eq!(keyboard.layout_id(), LayoutId::Numbers);
        assert!(std::ptr::eq(keyboard.layout(), LayoutId::Numbers.layout()));
        assert_eq!(keyboard.layout_signal().get(), LayoutId::Numbers);
    }
}
