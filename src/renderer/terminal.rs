//! Differential terminal renderer for the keyboard preview.
//!
//! Compares the current frame to the previous one and only writes cells
//! that changed, using crossterm commands queued into any writer.
//!
//! # Algorithm
//!
//! 1. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: move there, set colors/attributes, print the glyph
//! 2. Reset styles and flush the writer once
//! 3. Store current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Cell};

/// Differential renderer writing to `W`.
pub struct DiffRenderer<W: Write> {
    out: W,
    previous: Option<FrameBuffer>,
    /// Cell origin of the frame on the terminal.
    origin: (u16, u16),
}

impl<W: Write> DiffRenderer<W> {
    /// Create a renderer drawing at the top-left corner.
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous: None,
            origin: (0, 0),
        }
    }

    /// Draw frames offset by `(x, y)` cells.
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.origin = (x, y);
        self
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns the number of cells written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<usize> {
        let same_size = matches!(
            &self.previous,
            Some(prev) if prev.width() == buffer.width() && prev.height() == buffer.height()
        );

        let mut written = 0;
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                let unchanged = same_size
                    && self
                        .previous
                        .as_ref()
                        .and_then(|prev| prev.get(x, y))
                        .is_some_and(|prev| prev == cell);
                if unchanged {
                    continue;
                }
                self.write_cell(x, y, cell)?;
                written += 1;
            }
        }

        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        self.out.flush()?;
        self.previous = Some(buffer.clone());
        Ok(written)
    }

    fn write_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        let (ox, oy) = self.origin;
        queue!(
            self.out,
            MoveTo(ox.saturating_add(x), oy.saturating_add(y)),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(cell.fg.into()),
            SetBackgroundColor(cell.bg.into()),
        )?;
        if cell.attrs.contains(Attr::BOLD) {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if cell.attrs.contains(Attr::DIM) {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if cell.attrs.contains(Attr::UNDERLINE) {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        if cell.attrs.contains(Attr::INVERSE) {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(self.out, Print(cell.ch))
    }

    /// Invalidate the previous frame.
    ///
    /// Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if we have a previous frame to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode: raw input, alternate screen, mouse capture.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(
            self.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        )?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        disable_raw_mode()
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
