//! HD44780 character LCD in 4-bit mode
//!
//! Six GPIOs: RS, EN and the upper data lines D4-D7. R/W is tied low, so
//! the busy flag is never read and every command is followed by its
//! worst-case execution time instead.

use embedded_hal::delay::DelayNs;
use latchkey_hal::OutputPin;

use crate::backend::{DisplayError, DisplaySink};

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

const CURSOR_ON: u8 = 0x02;
const BLINK_ON: u8 = 0x01;

/// Execution time of clear and home (µs)
const SLOW_COMMAND_US: u32 = 2_000;
/// Execution time of every other command (µs)
const FAST_COMMAND_US: u32 = 50;

/// 4-bit HD44780 driver
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver
    ///
    /// # Arguments
    /// - `data`: D4, D5, D6, D7 in that order
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    /// Run the power-on initialisation sequence
    ///
    /// Leaves the display on, cursor hidden, cleared, with the address
    /// incrementing after every character.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.rs.set_low();
        self.en.set_low();
        self.delay.delay_ms(50);

        // Reset by instruction: three times 8-bit, then switch to 4-bit
        for _ in 0..3 {
            self.write_nibble(0x03);
            self.delay.delay_us(4_500);
        }
        self.write_nibble(0x02);
        self.delay.delay_us(FAST_COMMAND_US);

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.command(CMD_ENTRY_MODE)?;
        self.command(CMD_CLEAR)
    }

    /// Release the pins and delay
    pub fn free(self) -> (P, P, [P; 4], D) {
        (self.rs, self.en, self.data, self.delay)
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.rs.set_low();
        self.write_byte(cmd);
        let wait = if cmd <= 0x03 {
            SLOW_COMMAND_US
        } else {
            FAST_COMMAND_US
        };
        self.delay.delay_us(wait);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(nibble & (1 << bit) != 0);
        }
        self.en.set_high();
        self.delay.delay_us(1);
        self.en.set_low();
        self.delay.delay_us(1);
    }
}

impl<P: OutputPin, D: DelayNs> DisplaySink for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)
    }

    fn set_cursor(&mut self, position: u8) -> Result<(), DisplayError> {
        if position > 0x7F {
            return Err(DisplayError::InvalidPosition);
        }
        self.command(CMD_SET_DDRAM | position)
    }

    fn write_char(&mut self, c: u8) -> Result<(), DisplayError> {
        self.rs.set_high();
        self.write_byte(c);
        self.delay.delay_us(FAST_COMMAND_US);
        Ok(())
    }

    fn set_cursor_style(&mut self, visible: bool, blink: bool) -> Result<(), DisplayError> {
        let mut cmd = CMD_DISPLAY_ON;
        if visible {
            cmd |= CURSOR_ON;
        }
        if blink {
            cmd |= BLINK_ON;
        }
        self.command(cmd)
    }
}
