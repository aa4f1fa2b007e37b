//! Indicator colours and the indicator node's byte mapping

use crate::message::{RELEASE_KEY, RESET};

/// Colour states of the RGB indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    /// All channels off
    Off,
    /// A key press was accepted (yellow)
    Accept,
    /// Correct code entered (blue)
    Unlocked,
    /// Wrong code entered (red)
    Denied,
    /// Controller re-locked (red)
    Locked,
}

impl IndicatorColor {
    /// Channel levels as (red, green, blue)
    pub const fn rgb(self) -> (bool, bool, bool) {
        match self {
            IndicatorColor::Off => (false, false, false),
            IndicatorColor::Accept => (true, true, false),
            IndicatorColor::Unlocked => (false, false, true),
            IndicatorColor::Denied | IndicatorColor::Locked => (true, false, false),
        }
    }

    /// Colour the indicator node shows for a received byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            RELEASE_KEY => IndicatorColor::Locked,
            RESET => IndicatorColor::Denied,
            _ => IndicatorColor::Accept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_channels() {
        assert_eq!(IndicatorColor::Accept.rgb(), (true, true, false));
        assert_eq!(IndicatorColor::Unlocked.rgb(), (false, false, true));
        assert_eq!(IndicatorColor::Denied.rgb(), IndicatorColor::Locked.rgb());
        assert_eq!(IndicatorColor::Off.rgb(), (false, false, false));
    }

    #[test]
    fn test_byte_mapping() {
        assert_eq!(IndicatorColor::from_byte(b'D'), IndicatorColor::Locked);
        assert_eq!(IndicatorColor::from_byte(0), IndicatorColor::Denied);
        assert_eq!(IndicatorColor::from_byte(b'5'), IndicatorColor::Accept);
        assert_eq!(IndicatorColor::from_byte(b'#'), IndicatorColor::Accept);
    }
}
