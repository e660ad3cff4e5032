//! Keyboard appearance.
//!
//! Colors and labels only. Geometry lives in [`crate::layout::keys`] as
//! constants shared by paint and hit-test and is deliberately not part of
//! the configuration.

use crate::types::Rgba;

/// Keyboard background.
pub const KEYBOARD_BACKGROUND: Rgba = Rgba::rgb(0xE0, 0xE0, 0xE0);

/// Key glyphs and icons.
pub const KEY_COLOR: Rgba = Rgba::BLACK;

/// Fill behind the enter label.
pub const ENTER_FILL: Rgba = Rgba::rgb(0x8C, 0x8C, 0x8C);

/// Appearance of the keyboard.
///
/// # Example
///
/// ```ignore
/// let config = KeyboardConfig {
///     enter_label: "OK".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// Color the whole widget is cleared to before keys are drawn.
    pub background: Rgba,
    /// Foreground of letters and icons.
    pub key_color: Rgba,
    /// Background rectangle of the enter key.
    pub enter_fill: Rgba,
    /// Label centered on the enter key.
    pub enter_label: String,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            background: KEYBOARD_BACKGROUND,
            key_color: KEY_COLOR,
            enter_fill: ENTER_FILL,
            enter_label: "ENTER".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KeyboardConfig::default();
        assert_eq!(config.background, Rgba::rgb(0xE0, 0xE0, 0xE0));
        assert_eq!(config.key_color, Rgba::BLACK);
        assert_eq!(config.enter_label, "ENTER");
    }

    #[test]
    fn test_override_label() {
        let config = KeyboardConfig {
            enter_label: "OK".to_string(),
            ..Default::default()
        };
        assert_eq!(config.enter_label, "OK");
        assert_eq!(config.enter_fill, ENTER_FILL);
    }
}
