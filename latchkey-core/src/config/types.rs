//! Configuration type definitions

use crate::keypad::{Symbol, CODE_LEN, STORED_CODE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lock behaviour
///
/// The release key is always [`Symbol::RELEASE`], which the peripheral
/// nodes also recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LockConfig {
    /// Code that unlocks the controller
    pub code: [Symbol; CODE_LEN],
}

impl LockConfig {
    pub const fn new() -> Self {
        Self {
            code: STORED_CODE,
        }
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Keypad scan timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeypadTiming {
    /// Delay after driving a column before the rows are read (µs)
    pub settle_us: u32,
    /// Time a row must stay active to count as a press (µs)
    pub debounce_us: u32,
    /// Poll interval while waiting for a key to be released (µs)
    pub release_poll_us: u32,
}

impl KeypadTiming {
    pub const fn new() -> Self {
        Self {
            settle_us: 100,
            debounce_us: 20_000,
            release_poll_us: 1_000,
        }
    }
}

impl Default for KeypadTiming {
    fn default() -> Self {
        Self::new()
    }
}

/// Temperature sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Timer period between conversions (ms)
    pub period_ms: u32,
    /// ADC reference voltage (mV)
    pub vref_mv: u16,
    /// Fixed divider resistor between the sensor and vref (Ω)
    pub reference_ohms: u32,
    /// Sensor resistance at 0°C (Ω)
    pub r0_ohms: u32,
}

impl SamplerConfig {
    pub const fn new() -> Self {
        Self {
            period_ms: 500,
            vref_mv: 3300,
            reference_ohms: 7500,
            r0_ohms: 1000,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// I2C bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusConfig {
    /// SCL frequency (Hz)
    pub frequency_hz: u32,
    /// Longest a single write transaction may take (µs)
    pub timeout_us: u32,
}

impl BusConfig {
    pub const fn new() -> Self {
        Self {
            frequency_hz: 100_000,
            timeout_us: 5_000,
        }
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete controller node configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    pub lock: LockConfig,
    pub keypad: KeypadTiming,
    pub sampler: SamplerConfig,
    pub bus: BusConfig,
}

impl ControllerConfig {
    pub const fn new() -> Self {
        Self {
            lock: LockConfig::new(),
            keypad: KeypadTiming::new(),
            sampler: SamplerConfig::new(),
            bus: BusConfig::new(),
        }
    }
}
