//! Display node dispatcher
//!
//! Decodes the byte stream with [`DisplayDecoder`] and renders the result:
//!
//! - Digit keys `0`-`7` show a demo mode: the title on line one, the key in
//!   the last column of line two, and the cursor parked after the title.
//! - `C` toggles the cursor, `9` toggles blinking.
//! - `D`, `Z` and NUL clear the screen; NUL also hides the cursor.
//! - Text runs (the temperature report) are printed from the start of
//!   line two.

use latchkey_protocol::{DisplayCommand, DisplayDecoder, MenuMode};

use super::Dispatcher;
use crate::backend::{DisplayError, DisplaySink, LINE_ONE, LINE_TWO};

/// DDRAM address the selecting key is echoed to
pub const KEY_ECHO_POSITION: u8 = 0x4F;

/// Renders received bytes on a character display
pub struct DisplayDispatcher<S> {
    sink: S,
    decoder: DisplayDecoder,
    cursor_visible: bool,
    blink: bool,
    errors: u32,
}

impl<S: DisplaySink> DisplayDispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            decoder: DisplayDecoder::new(),
            cursor_visible: false,
            blink: false,
            errors: 0,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Display writes that failed
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Render one decoded command
    pub fn apply(&mut self, command: DisplayCommand) -> Result<(), DisplayError> {
        match command {
            DisplayCommand::Menu(mode) => self.show_menu(mode),
            DisplayCommand::ToggleCursor => {
                self.cursor_visible = !self.cursor_visible;
                if !self.cursor_visible {
                    self.blink = false;
                }
                self.sink.set_cursor_style(self.cursor_visible, self.blink)
            }
            DisplayCommand::ToggleBlink => {
                self.blink = !self.blink;
                if self.blink {
                    self.cursor_visible = true;
                }
                self.sink.set_cursor_style(self.cursor_visible, self.blink)
            }
            DisplayCommand::Clear => self.sink.clear(),
            DisplayCommand::Reset => {
                self.cursor_visible = false;
                self.blink = false;
                self.sink.clear()?;
                self.sink.set_cursor_style(false, false)
            }
            DisplayCommand::TextBegin(c) => {
                self.sink.set_cursor(LINE_TWO)?;
                self.sink.write_char(c)
            }
            DisplayCommand::Text(c) => self.sink.write_char(c),
            DisplayCommand::TextEnd => Ok(()),
            DisplayCommand::Ignored(key) => {
                trace!("key {=u8:#x} has no display function", key);
                Ok(())
            }
        }
    }

    fn show_menu(&mut self, mode: MenuMode) -> Result<(), DisplayError> {
        self.sink.clear()?;
        self.sink.print_at(LINE_ONE, mode.title().as_bytes())?;
        self.sink.print_at(KEY_ECHO_POSITION, &[mode.key()])?;
        self.sink.set_cursor(mode.cursor_position())
    }
}

impl<S: DisplaySink> Dispatcher for DisplayDispatcher<S> {
    fn dispatch(&mut self, byte: u8) {
        let command = self.decoder.decode(byte);
        if let Err(e) = self.apply(command) {
            self.errors = self.errors.wrapping_add(1);
            warn!("display {} failed: {}", command, e);
        }
    }
}
