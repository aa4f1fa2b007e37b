//! Temperature report formatting
//!
//! Layout, 12 bytes:
//!
//! ```text
//! T e m p :   D D . d C \0
//! ```
//!
//! The integer part is two digits without a sign, clamped to 0..=99. The
//! decimal digit is truncated, not rounded.

/// Report length including the NUL terminator
pub const REPORT_LEN: usize = 12;

const TAG: &[u8; 6] = b"Temp: ";

/// Highest value the layout can show, in 0.1°C
const MAX_TENTHS: u16 = 999;

/// Formatted temperature report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureReport {
    bytes: [u8; REPORT_LEN],
}

impl TemperatureReport {
    /// Format a temperature
    ///
    /// Negative, non-finite and out-of-range values are clamped.
    pub fn from_celsius(celsius: f32) -> Self {
        // `as` saturates and maps NaN to 0
        let tenths = ((celsius * 10.0) as u16).min(MAX_TENTHS);
        Self::from_tenths(tenths)
    }

    fn from_tenths(tenths: u16) -> Self {
        let mut bytes = [0u8; REPORT_LEN];
        bytes[..TAG.len()].copy_from_slice(TAG);
        bytes[6] = b'0' + (tenths / 100) as u8;
        bytes[7] = b'0' + (tenths / 10 % 10) as u8;
        bytes[8] = b'.';
        bytes[9] = b'0' + (tenths % 10) as u8;
        bytes[10] = b'C';
        bytes[11] = 0;
        Self { bytes }
    }

    /// Bytes as sent on the bus, terminator included
    pub fn as_bytes(&self) -> &[u8; REPORT_LEN] {
        &self.bytes
    }

    /// Printable part, without the terminator
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..REPORT_LEN - 1]).unwrap_or_default()
    }

    /// Reported value in 0.1°C
    pub fn tenths(&self) -> u16 {
        let digit = |i: usize| (self.bytes[i] - b'0') as u16;
        digit(6) * 100 + digit(7) * 10 + digit(9)
    }
}
