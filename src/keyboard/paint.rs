//! Keyboard painting.

use tracing::debug_span;

use super::TextKeyboard;
use crate::layout::{
    walk_row, KeyToken, ENTER_HEIGHT, ENTER_WIDTH, PAINT_LEFT_MARGIN, PAINT_TOP_MARGIN, ROW_PITCH,
};
use crate::renderer::{Align, Canvas, Icon};
use crate::types::Coord;

impl TextKeyboard<'_> {
    /// Draw the active layout onto `canvas`.
    ///
    /// Works whether or not a field is bound. Clears the repaint request.
    pub fn paint(&mut self, canvas: &mut dyn Canvas) {
        let layout_id = self.layout_id();
        let _span = debug_span!("keyboard_paint", layout = ?layout_id).entered();

        let config = &self.config;
        canvas.clear(config.background);

        for (i, row) in layout_id.layout().rows().iter().enumerate() {
            let y = PAINT_TOP_MARGIN + i as Coord * ROW_PITCH;
            for placed in walk_row(row) {
                let x = PAINT_LEFT_MARGIN + placed.offset;
                match placed.token {
                    KeyToken::Blank => {}
                    KeyToken::Char(c) => canvas.draw_char(x, y, c, config.key_color),
                    KeyToken::Space => canvas.draw_icon(x, y, Icon::Spacebar, config.key_color),
                    KeyToken::Enter => {
                        canvas.fill_rect(x, y - 2, ENTER_WIDTH, ENTER_HEIGHT, config.enter_fill);
                        canvas.draw_text(
                            x + ENTER_WIDTH / 2,
                            y,
                            &config.enter_label,
                            Align::Centered,
                            config.key_color,
                        );
                    }
                    KeyToken::Control(key) => {
                        canvas.draw_icon(x, y, Icon::for_control(key), config.key_color)
                    }
                }
            }
        }

        self.needs_repaint.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyboardConfig;
    use crate::layout::LayoutId;
    use crate::renderer::{DrawOp, RecordingCanvas};
    use crate::text::TextEdit;
    use crate::types::Rgba;

    fn painted(kb: &mut TextKeyboard<'_>) -> Vec<DrawOp> {
        let mut canvas = RecordingCanvas::new();
        kb.paint(&mut canvas);
        canvas.take()
    }

    #[test]
    fn test_paint_clears_first() {
        let mut kb = TextKeyboard::new();
        let ops = painted(&mut kb);
        assert_eq!(ops[0], DrawOp::Clear(Rgba::rgb(0xE0, 0xE0, 0xE0)));
    }

    #[test]
    fn test_paint_first_row_positions() {
        let mut kb = TextKeyboard::new();
        let ops = painted(&mut kb);
        let first_row: Vec<(Coord, char)> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Char { x, y: 15, c, .. } => Some((*x, *c)),
                _ => None,
            })
            .collect();
        assert_eq!(first_row.len(), 10);
        assert_eq!(first_row[0], (15, 'q'));
        assert_eq!(first_row[3], (105, 'r'));
        assert_eq!(first_row[9], (285, 'p'));
    }

    #[test]
    fn test_paint_indent_skips_blank() {
        let mut kb = TextKeyboard::new();
        let ops = painted(&mut kb);
        let a = ops.iter().find_map(|op| match op {
            DrawOp::Char { x, y, c: 'a', .. } => Some((*x, *y)),
            _ => None,
        });
        assert_eq!(a, Some((30, 55)));
    }

    #[test]
    fn test_paint_bottom_row() {
        let mut kb = TextKeyboard::new();
        let ops = painted(&mut kb);
        assert!(ops.contains(&DrawOp::Icon {
            x: 15,
            y: 135,
            icon: Icon::Numbers,
            color: Rgba::BLACK,
        }));
        assert!(ops.contains(&DrawOp::Icon {
            x: 60,
            y: 135,
            icon: Icon::Spacebar,
            color: Rgba::BLACK,
        }));
        assert!(ops.contains(&DrawOp::Rect {
            x: 195,
            y: 133,
            width: 80,
            height: 25,
            color: KeyboardConfig::default().enter_fill,
        }));
        assert!(ops.contains(&DrawOp::Text {
            x: 235,
            y: 135,
            text: "ENTER".to_string(),
            align: Align::Centered,
            color: Rgba::BLACK,
        }));
    }

    #[test]
    fn test_paint_numbers_layout() {
        let mut kb = TextKeyboard::new();
        kb.set_layout(LayoutId::Numbers);
        let ops = painted(&mut kb);
        assert!(ops.contains(&DrawOp::Icon {
            x: 15 + 17 * 15,
            y: 95,
            icon: Icon::Backspace,
            color: Rgba::BLACK,
        }));
        assert!(ops.iter().any(|op| matches!(op, DrawOp::Icon { icon: Icon::Letters, .. })));
    }

    #[test]
    fn test_paint_clears_repaint_request() {
        let mut field = TextEdit::new(10);
        let mut kb = TextKeyboard::new();
        kb.show(&mut field);
        assert!(kb.needs_repaint());

        painted(&mut kb);
        assert!(!kb.needs_repaint());

        kb.on_touch_end(20, 100);
        assert!(kb.needs_repaint());
    }

    #[test]
    fn test_paint_uses_config() {
        let config = KeyboardConfig {
            background: Rgba::WHITE,
            enter_label: "OK".to_string(),
            ..Default::default()
        };
        let mut kb = TextKeyboard::new().with_config(config);
        let ops = painted(&mut kb);
        assert_eq!(ops[0], DrawOp::Clear(Rgba::WHITE));
        assert!(ops.iter().any(|op| matches!(op, DrawOp::Text { text, .. } if text == "OK")));
    }
}
