//! One-byte application messages and the reserved control bytes

use crate::address::Destination;

/// Clears the display after a successful unlock
pub const CLEAR_DISPLAY: u8 = b'Z';

/// Resets both peripherals after a rejected code, and terminates text runs
pub const RESET: u8 = 0x00;

/// Keypad symbol that re-locks the controller
pub const RELEASE_KEY: u8 = b'D';

/// A single payload byte addressed to one peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusMessage {
    /// Payload byte
    pub byte: u8,
    /// Node that consumes the byte
    pub destination: Destination,
}

impl BusMessage {
    /// Create a message for an arbitrary destination
    pub const fn new(byte: u8, destination: Destination) -> Self {
        Self { byte, destination }
    }

    /// Create a message for the indicator node
    pub const fn to_indicator(byte: u8) -> Self {
        Self::new(byte, Destination::Indicator)
    }

    /// Create a message for the display node
    pub const fn to_display(byte: u8) -> Self {
        Self::new(byte, Destination::Display)
    }

    /// 7-bit bus address this message is written to
    pub const fn address(&self) -> u8 {
        self.destination.address()
    }
}
