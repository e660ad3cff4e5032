//! Bound text field.
//!
//! The keyboard edits a field it does not own. A field exposes a
//! [`FieldBuffer`], a character sequence whose capacity is fixed when the
//! field is created, and a way to request a repaint.
//!
//! Capacity follows the device convention of counting the terminator slot:
//! a field of capacity `n` holds at most `n - 1` characters.

use std::fmt;

use spark_signals::{signal, Signal};

// =============================================================================
// FIELD BUFFER
// =============================================================================

/// Capacity-bounded character buffer edited in place.
///
/// Inserting into a full buffer drops the character. Removing past the end
/// does nothing. Neither reports an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBuffer {
    chars: Vec<char>,
    capacity: usize,
}

impl FieldBuffer {
    /// Create an empty buffer of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity.saturating_sub(1)),
            capacity,
        }
    }

    /// Create a buffer holding `text`, truncated to fit.
    pub fn with_text(capacity: usize, text: &str) -> Self {
        let mut buffer = Self::new(capacity);
        buffer.set_text(text);
        buffer
    }

    /// Capacity including the terminator slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of characters of content.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether one more character fits.
    #[inline]
    pub fn has_room(&self) -> bool {
        self.chars.len() + 1 < self.capacity
    }

    /// Character at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Content as a slice.
    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Iterate the content.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Insert `c` at `index`, shifting the tail right.
    ///
    /// Returns `false` and leaves the buffer untouched when it is full or
    /// `index` is past the end of the content.
    pub fn insert(&mut self, index: usize, c: char) -> bool {
        if !self.has_room() || index > self.chars.len() {
            return false;
        }
        self.chars.insert(index, c);
        true
    }

    /// Remove the character at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Option<char> {
        if index >= self.chars.len() {
            return None;
        }
        Some(self.chars.remove(index))
    }

    /// Replace the content, truncated to fit.
    pub fn set_text(&mut self, text: &str) {
        let limit = self.capacity.saturating_sub(1);
        self.chars.clear();
        self.chars.extend(text.chars().take(limit));
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.chars.clear();
    }
}

impl fmt::Display for FieldBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

// =============================================================================
// TEXT FIELD
// =============================================================================

/// A text field the keyboard can be bound to.
pub trait TextField {
    /// The field content.
    fn buffer(&self) -> &FieldBuffer;

    /// The field content, for in-place editing.
    fn buffer_mut(&mut self) -> &mut FieldBuffer;

    /// Request a repaint of the field.
    fn invalidate(&mut self);

    /// Capacity of the field including the terminator slot.
    fn max_length(&self) -> usize {
        self.buffer().capacity()
    }
}

/// Plain single-line text field.
///
/// Every repaint request bumps [`TextEdit::revision`], which hosts can read
/// from a derived or effect to know when to redraw.
pub struct TextEdit {
    buffer: FieldBuffer,
    revision: Signal<u64>,
}

impl TextEdit {
    /// Create an empty field holding at most `max_length - 1` characters.
    pub fn new(max_length: usize) -> Self {
        Self::with_text(max_length, "")
    }

    /// Create a field with initial content.
    pub fn with_text(max_length: usize, text: &str) -> Self {
        Self {
            buffer: FieldBuffer::with_text(max_length, text),
            revision: signal(0),
        }
    }

    /// Current content as a string.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of repaint requests so far.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// The revision signal itself.
    pub fn revision_signal(&self) -> Signal<u64> {
        self.revision.clone()
    }
}

impl fmt::Debug for TextEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEdit")
            .field("buffer", &self.buffer)
            .field("revision", &self.revision.get())
            .finish()
    }
}

impl TextField for TextEdit {
    fn buffer(&self) -> &FieldBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut FieldBuffer {
        &mut self.buffer
    }

    fn invalidate(&mut self) {
        self.revision.set(self.revision.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_insert_and_remove() {
        let mut b = FieldBuffer::new(10);
        assert!(b.insert(0, 'b'));
        assert!(b.insert(0, 'a'));
        assert!(b.insert(2, 'c'));
        assert_eq!(b.to_string(), "abc");

        assert_eq!(b.remove(1), Some('b'));
        assert_eq!(b.to_string(), "ac");
        assert_eq!(b.remove(5), None);
        assert_eq!(b.to_string(), "ac");
    }

    #[test]
    fn test_buffer_reserves_terminator_slot() {
        let mut b = FieldBuffer::new(4);
        assert!(b.insert(0, 'a'));
        assert!(b.insert(1, 'b'));
        assert!(b.insert(2, 'c'));
        assert!(!b.has_room());
        assert!(!b.insert(3, 'd'));
        assert!(!b.insert(0, 'd'));
        assert_eq!(b.to_string(), "abc");
    }

    #[test]
    fn test_buffer_insert_past_end() {
        let mut b = FieldBuffer::with_text(10, "ab");
        assert!(!b.insert(3, 'x'));
        assert_eq!(b.to_string(), "ab");
    }

    #[test]
    fn test_buffer_with_text_truncates() {
        let b = FieldBuffer::with_text(4, "abcdef");
        assert_eq!(b.to_string(), "abc");
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_zero_capacity() {
        let mut b = FieldBuffer::new(0);
        assert!(!b.has_room());
        assert!(!b.insert(0, 'a'));
        assert!(b.is_empty());
    }

    #[test]
    fn test_text_edit_invalidate_bumps_revision() {
        let mut field = TextEdit::with_text(8, "hi");
        assert_eq!(field.max_length(), 8);
        assert_eq!(field.revision(), 0);
        field.invalidate();
        field.invalidate();
        assert_eq!(field.revision(), 2);
        assert_eq!(field.revision_signal().get(), 2);
        assert_eq!(field.text(), "hi");
    }
}
