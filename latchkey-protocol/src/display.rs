//! Display node byte decoding
//!
//! The display receives keypad symbols forwarded by the controller, the
//! control bytes from [`crate::message`], and the temperature report as a
//! run of literal characters. All of them share one byte space, so the
//! decoder tells them apart by alphabet and by state:
//!
//! - In command mode, keypad symbols and control bytes are commands.
//! - Any other byte opens a text run; it and every following byte is a
//!   literal character until a [`RESET`] byte closes the run.
//! - [`CLEAR_DISPLAY`] and [`RELEASE_KEY`] clear the screen in either mode.
//!   Report text never contains them, so unlock and re-lock always reach
//!   the screen even when a report's terminator was lost.
//! - A run that grows past [`MAX_TEXT_RUN`] characters is closed implicitly
//!   so a lost terminator cannot wedge the display in text mode.
//!
//! Keypad symbols are never outside the keypad alphabet, so forwarded keys
//! can not open a text run by accident.

use crate::message::{CLEAR_DISPLAY, RELEASE_KEY, RESET};

/// Every byte a 4x4 keypad can produce
pub const KEYPAD_ALPHABET: &[u8; 16] = b"0123456789ABCD*#";

/// Longest text run, one display line
pub const MAX_TEXT_RUN: usize = 16;

/// Display demo modes selected by the digit keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuMode {
    Static,
    Toggle,
    UpCounter,
    InAndOut,
    DownCounter,
    RotateLeft,
    RotateRight,
    FillLeft,
}

impl MenuMode {
    /// Every mode in key order
    pub const ALL: [MenuMode; 8] = [
        MenuMode::Static,
        MenuMode::Toggle,
        MenuMode::UpCounter,
        MenuMode::InAndOut,
        MenuMode::DownCounter,
        MenuMode::RotateLeft,
        MenuMode::RotateRight,
        MenuMode::FillLeft,
    ];

    /// Mode selected by a key, if any
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'0'..=b'7' => Some(Self::ALL[(key - b'0') as usize]),
            _ => None,
        }
    }

    /// Key that selects this mode
    pub fn key(self) -> u8 {
        b'0' + self as u8
    }

    /// Title shown on the first display line
    pub fn title(self) -> &'static str {
        match self {
            MenuMode::Static => "STATIC",
            MenuMode::Toggle => "TOGGLE",
            MenuMode::UpCounter => "UP COUNTER",
            MenuMode::InAndOut => "IN AND OUT",
            MenuMode::DownCounter => "DOWN COUNTER",
            MenuMode::RotateLeft => "ROTATE 1 LEFT",
            MenuMode::RotateRight => "ROTATE 7 RIGHT",
            MenuMode::FillLeft => "FILL LEFT",
        }
    }

    /// DDRAM address the cursor rests at after the title is drawn
    pub fn cursor_position(self) -> u8 {
        self.title().len() as u8
    }
}

/// Decoded meaning of one received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    /// Show a demo mode title
    Menu(MenuMode),
    /// Toggle the underline cursor
    ToggleCursor,
    /// Toggle cursor blinking
    ToggleBlink,
    /// Clear the screen (unlock or re-lock)
    Clear,
    /// Rejected code: clear and return to the idle screen
    Reset,
    /// First character of a text run
    TextBegin(u8),
    /// Next character of a text run
    Text(u8),
    /// Text run terminated
    TextEnd,
    /// Keypad symbol with no display function
    Ignored(u8),
}

/// Stateful decoder for the display node's byte stream
#[derive(Debug, Clone, Default)]
pub struct DisplayDecoder {
    /// Characters in the current text run, `None` in command mode
    text_run: Option<usize>,
}

impl DisplayDecoder {
    /// Create a decoder in command mode
    pub const fn new() -> Self {
        Self { text_run: None }
    }

    /// Whether a text run is open
    pub fn in_text(&self) -> bool {
        self.text_run.is_some()
    }

    /// Drop any open text run
    pub fn reset(&mut self) {
        self.text_run = None;
    }

    /// Decode one received byte
    pub fn decode(&mut self, byte: u8) -> DisplayCommand {
        if let Some(len) = self.text_run {
            match byte {
                RESET => {
                    self.text_run = None;
                    return DisplayCommand::TextEnd;
                }
                CLEAR_DISPLAY | RELEASE_KEY => {
                    self.text_run = None;
                    return DisplayCommand::Clear;
                }
                _ => {}
            }
            if len < MAX_TEXT_RUN {
                self.text_run = Some(len + 1);
                return DisplayCommand::Text(byte);
            }
            // Over-long run, fall back to command mode
            self.text_run = None;
        }

        Self::decode_command(byte).unwrap_or_else(|| {
            self.text_run = Some(1);
            DisplayCommand::TextBegin(byte)
        })
    }

    /// Command meaning of a byte, `None` if it opens a text run
    fn decode_command(byte: u8) -> Option<DisplayCommand> {
        if let Some(mode) = MenuMode::from_key(byte) {
            return Some(DisplayCommand::Menu(mode));
        }
        match byte {
            RESET => Some(DisplayCommand::Reset),
            CLEAR_DISPLAY | RELEASE_KEY => Some(DisplayCommand::Clear),
            b'C' => Some(DisplayCommand::ToggleCursor),
            b'9' => Some(DisplayCommand::ToggleBlink),
            b if KEYPAD_ALPHABET.contains(&b) => Some(DisplayCommand::Ignored(b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keys() {
        let mut decoder = DisplayDecoder::new();
        assert_eq!(decoder.decode(b'0'), DisplayCommand::Menu(MenuMode::Static));
        assert_eq!(decoder.decode(b'4'), DisplayCommand::Menu(MenuMode::DownCounter));
        assert_eq!(decoder.decode(b'7'), DisplayCommand::Menu(MenuMode::FillLeft));
        assert!(!decoder.in_text());
    }

    #[test]
    fn test_menu_layout() {
        assert_eq!(MenuMode::Static.cursor_position(), 0x06);
        assert_eq!(MenuMode::UpCounter.cursor_position(), 0x0A);
        assert_eq!(MenuMode::DownCounter.cursor_position(), 0x0C);
        assert_eq!(MenuMode::RotateLeft.cursor_position(), 0x0D);
        assert_eq!(MenuMode::RotateRight.cursor_position(), 0x0E);
        assert_eq!(MenuMode::FillLeft.cursor_position(), 0x09);
        for mode in MenuMode::ALL {
            assert_eq!(MenuMode::from_key(mode.key()), Some(mode));
        }
    }

    #[test]
    fn test_control_bytes() {
        let mut decoder = DisplayDecoder::new();
        assert_eq!(decoder.decode(b'C'), DisplayCommand::ToggleCursor);
        assert_eq!(decoder.decode(b'9'), DisplayCommand::ToggleBlink);
        assert_eq!(decoder.decode(b'D'), DisplayCommand::Clear);
        assert_eq!(decoder.decode(b'Z'), DisplayCommand::Clear);
        assert_eq!(decoder.decode(0x00), DisplayCommand::Reset);
    }

    #[test]
    fn test_unmapped_keys_do_not_open_text() {
        let mut decoder = DisplayDecoder::new();
        for &key in b"8AB*#" {
            assert_eq!(decoder.decode(key), DisplayCommand::Ignored(key));
            assert!(!decoder.in_text());
        }
    }

    #[test]
    fn test_temperature_report_is_literal() {
        let mut decoder = DisplayDecoder::new();
        let report = b"Temp: 23.5C\0";

        assert_eq!(decoder.decode(report[0]), DisplayCommand::TextBegin(b'T'));
        // Digits and 'C' would be commands outside a text run
        for &byte in &report[1..report.len() - 1] {
            assert_eq!(decoder.decode(byte), DisplayCommand::Text(byte));
        }
        assert_eq!(decoder.decode(0), DisplayCommand::TextEnd);
        assert!(!decoder.in_text());

        // Back in command mode
        assert_eq!(decoder.decode(b'2'), DisplayCommand::Menu(MenuMode::UpCounter));
    }

    #[test]
    fn test_overlong_run_closes() {
        let mut decoder = DisplayDecoder::new();
        assert_eq!(decoder.decode(b'x'), DisplayCommand::TextBegin(b'x'));
        for _ in 1..MAX_TEXT_RUN {
            assert_eq!(decoder.decode(b'x'), DisplayCommand::Text(b'x'));
        }
        // Run is full; the next byte is decoded in command mode
        assert_eq!(decoder.decode(b'1'), DisplayCommand::Menu(MenuMode::Toggle));
        assert!(!decoder.in_text());
    }

    #[test]
    fn test_clear_bytes_close_open_run() {
        let mut decoder = DisplayDecoder::new();
        for &byte in b"Temp" {
            decoder.decode(byte);
        }
        assert!(decoder.in_text());
        assert_eq!(decoder.decode(RELEASE_KEY), DisplayCommand::Clear);
        assert!(!decoder.in_text());
        assert_eq!(decoder.decode(b'2'), DisplayCommand::Menu(MenuMode::UpCounter));

        decoder.decode(b'T');
        assert_eq!(decoder.decode(CLEAR_DISPLAY), DisplayCommand::Clear);
        assert!(!decoder.in_text());
    }

    #[test]
    fn test_reset_drops_run() {
        let mut decoder = DisplayDecoder::new();
        decoder.decode(b'T');
        assert!(decoder.in_text());
        decoder.reset();
        assert_eq!(decoder.decode(b'C'), DisplayCommand::ToggleCursor);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn keypad_symbols_never_open_text(keys in proptest::collection::vec(0usize..16, 0..64)) {
                let mut decoder = DisplayDecoder::new();
                for key in keys {
                    let command = decoder.decode(KEYPAD_ALPHABET[key]);
                    prop_assert!(!matches!(command, DisplayCommand::TextBegin(_)));
                    prop_assert!(!decoder.in_text());
                }
            }

            #[test]
            fn terminator_always_returns_to_commands(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
                let mut decoder = DisplayDecoder::new();
                for byte in bytes {
                    decoder.decode(byte);
                }
                decoder.decode(RESET);
                prop_assert!(!decoder.in_text());
            }
        }
    }
}
