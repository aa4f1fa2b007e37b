//! In-memory character display
//!
//! Models the two visible DDRAM lines of a 16x2 HD44780. Writes outside the
//! visible window advance the cursor but are not kept.

use crate::backend::{DisplayError, DisplaySink, LINE_LEN, LINE_ONE, LINE_TWO};

const COLS: usize = LINE_LEN as usize;

/// 16x2 screen buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextScreen {
    lines: [[u8; COLS]; 2],
    cursor: u8,
    cursor_visible: bool,
    blink: bool,
}

impl Default for TextScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TextScreen {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            lines: [[b' '; COLS]; 2],
            cursor: LINE_ONE,
            cursor_visible: false,
            blink: false,
        }
    }

    /// Contents of line 0 or 1, trailing blanks included
    pub fn line(&self, row: usize) -> &str {
        self.lines
            .get(row)
            .and_then(|line| core::str::from_utf8(line).ok())
            .unwrap_or("")
    }

    /// Current DDRAM address
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Cursor visibility and blink
    pub fn cursor_style(&self) -> (bool, bool) {
        (self.cursor_visible, self.blink)
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().flatten().all(|&c| c == b' ')
    }

    fn cell(&mut self, position: u8) -> Option<&mut u8> {
        let (row, base) = if position >= LINE_TWO {
            (1, LINE_TWO)
        } else {
            (0, LINE_ONE)
        };
        self.lines[row].get_mut((position - base) as usize)
    }
}

impl DisplaySink for TextScreen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.lines = [[b' '; COLS]; 2];
        self.cursor = LINE_ONE;
        Ok(())
    }

    fn set_cursor(&mut self, position: u8) -> Result<(), DisplayError> {
        if position > 0x7F {
            return Err(DisplayError::InvalidPosition);
        }
        self.cursor = position;
        Ok(())
    }

    fn write_char(&mut self, c: u8) -> Result<(), DisplayError> {
        let position = self.cursor;
        if let Some(cell) = self.cell(position) {
            // Keep the buffer valid UTF-8
            *cell = if c.is_ascii() && !c.is_ascii_control() { c } else { b'?' };
        }
        self.cursor = (position + 1) & 0x7F;
        Ok(())
    }

    fn set_cursor_style(&mut self, visible: bool, blink: bool) -> Result<(), DisplayError> {
        self.cursor_visible = visible;
        self.blink = blink;
        Ok(())
    }
}
