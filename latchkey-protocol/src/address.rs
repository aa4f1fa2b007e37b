//! Fixed target addresses on the bus

/// 7-bit address of the RGB indicator node
pub const INDICATOR_ADDRESS: u8 = 0x68;

/// 7-bit address of the LCD display node
pub const DISPLAY_ADDRESS: u8 = 0x48;

/// Peripheral node a message is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Destination {
    /// RGB indicator node
    Indicator,
    /// LCD display node
    Display,
}

impl Destination {
    /// Both peripherals, in the order fan-out writes are issued
    pub const ALL: [Destination; 2] = [Destination::Indicator, Destination::Display];

    /// 7-bit bus address of this destination
    pub const fn address(self) -> u8 {
        match self {
            Destination::Indicator => INDICATOR_ADDRESS,
            Destination::Display => DISPLAY_ADDRESS,
        }
    }

    /// Look up the destination owning a bus address
    pub fn from_address(address: u8) -> Option<Self> {
        match address {
            INDICATOR_ADDRESS => Some(Destination::Indicator),
            DISPLAY_ADDRESS => Some(Destination::Display),
            _ => None,
        }
    }
}
