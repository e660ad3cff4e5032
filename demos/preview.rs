//! Terminal Preview - Drive the keyboard with the mouse
//!
//! Paints the keyboard into a cell canvas and turns left clicks into touch
//! releases. Click the field line to move the cursor. ENTER commits, Esc
//! quits without committing.
//!
//! Run with: cargo run --example preview

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::KeyCode;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use spark_keyboard::input::{poll_event, route_event, CellMapping, InputEvent, TouchEvent, TouchPhase};
use spark_keyboard::{CellCanvas, CellMetrics, DiffRenderer, TextEdit, TextKeyboard, KEYBOARD_HEIGHT};

const CELL_WIDTH: i32 = 5;
const CELL_HEIGHT: i32 = 10;
const KEYBOARD_WIDTH: i32 = 320;
const FIELD_ROW: u16 = 1;
const FIELD_COL: u16 = 8;
const KEYBOARD_ROW: u16 = 3;
/// Screen pixels, measured from the field row, where the keyboard starts.
const KEYBOARD_TOP: i32 = (KEYBOARD_ROW - FIELD_ROW) as i32 * CELL_HEIGHT;
const FIELD_LEFT: i32 = FIELD_COL as i32 * CELL_WIDTH;

fn main() -> io::Result<()> {
    let mut field = TextEdit::with_text(24, "spark");
    let committed = Rc::new(Cell::new(None));

    let mut renderer = DiffRenderer::new(io::stdout()).with_origin(0, KEYBOARD_ROW);
    renderer.enter_fullscreen()?;

    let result = run(&mut field, &mut renderer, committed.clone());

    renderer.exit_fullscreen()?;
    result?;

    match committed.get() {
        Some(true) => println!("committed: {:?}", field.text()),
        _ => println!("cancelled"),
    }
    Ok(())
}

fn run(
    field: &mut TextEdit,
    renderer: &mut DiffRenderer<io::Stdout>,
    committed: Rc<Cell<Option<bool>>>,
) -> io::Result<()> {
    let mut keyboard = TextKeyboard::new().with_metrics(CellMetrics::new(CELL_WIDTH));
    keyboard.on_disable(move |commit| committed.set(Some(commit)));
    keyboard.show(field);

    // One mapping for the field line and the keyboard below it.
    let screen = CellMapping::new(0, FIELD_ROW, CELL_WIDTH, CELL_HEIGHT);
    let mut canvas = CellCanvas::for_pixels(KEYBOARD_WIDTH, KEYBOARD_HEIGHT, CELL_WIDTH, CELL_HEIGHT);

    while keyboard.is_visible() {
        if keyboard.needs_repaint() {
            keyboard.paint(&mut canvas);
            renderer.render(canvas.buffer())?;
        }
        draw_field(&keyboard)?;

        match poll_event(Duration::from_millis(50), &screen)? {
            Some(InputEvent::Key(KeyCode::Esc)) => keyboard.disable(false),
            Some(InputEvent::Resize(..)) => renderer.invalidate(),
            Some(InputEvent::Touch(touch)) if touch.y >= KEYBOARD_TOP => {
                let touch = TouchEvent {
                    y: touch.y - KEYBOARD_TOP,
                    ..touch
                };
                route_event(&mut keyboard, InputEvent::Touch(touch));
            }
            Some(InputEvent::Touch(touch))
                if touch.phase == TouchPhase::End && touch.y < CELL_HEIGHT =>
            {
                keyboard.set_cursor_pos(touch.x - FIELD_LEFT - CELL_WIDTH / 2);
            }
            _ => {}
        }
    }
    Ok(())
}

fn draw_field(keyboard: &TextKeyboard<'_>) -> io::Result<()> {
    let mut out = io::stdout();
    let content = keyboard
        .field()
        .map(|f| f.buffer().to_string())
        .unwrap_or_default();
    let cursor_col = FIELD_COL + (keyboard.cursor_pos() / CELL_WIDTH) as u16;
    queue!(
        out,
        MoveTo(0, FIELD_ROW),
        Clear(ClearType::CurrentLine),
        Print("Field: "),
        MoveTo(FIELD_COL, FIELD_ROW),
        Print(&content),
        MoveTo(0, FIELD_ROW + 1),
        Clear(ClearType::CurrentLine),
        MoveTo(cursor_col, FIELD_ROW + 1),
        Print('^'),
    )?;
    out.flush()
}
