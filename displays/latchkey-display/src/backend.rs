//! Character display sink trait
//!
//! Positions are HD44780 DDRAM addresses: the first line starts at 0x00,
//! the second at 0x40.

/// DDRAM address of the first character on line one
pub const LINE_ONE: u8 = 0x00;

/// DDRAM address of the first character on line two
pub const LINE_TWO: u8 = 0x40;

/// Visible characters per line
pub const LINE_LEN: u8 = 16;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid DDRAM address
    InvalidPosition,
}

/// Character display driven by the display dispatcher
pub trait DisplaySink {
    /// Clear the display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to a DDRAM address
    fn set_cursor(&mut self, position: u8) -> Result<(), DisplayError>;

    /// Write a character at the cursor and advance it
    fn write_char(&mut self, c: u8) -> Result<(), DisplayError>;

    /// Show or hide the underline cursor and its blinking
    fn set_cursor_style(&mut self, visible: bool, blink: bool) -> Result<(), DisplayError>;

    /// Print text starting at a DDRAM address
    ///
    /// Text running off the end of line one continues on line two.
    fn print_at(&mut self, position: u8, text: &[u8]) -> Result<(), DisplayError> {
        let mut position = position;
        self.set_cursor(position)?;
        for &c in text {
            if position == LINE_ONE + LINE_LEN {
                position = LINE_TWO;
                self.set_cursor(position)?;
            }
            self.write_char(c)?;
            position = position.wrapping_add(1);
        }
        Ok(())
    }
}
