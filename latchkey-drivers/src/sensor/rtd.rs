//! Platinum RTD in a voltage divider
//!
//! Circuit: VREF -- R_ref -- ADC_PIN -- RTD -- GND
//!
//! The ADC voltage gives the RTD resistance, and the Callendar-Van Dusen
//! equation (valid above 0°C) is solved for temperature:
//!
//! ```text
//! V = raw * vref / 4095
//! R = R_ref * V / (vref - V)
//! T = (-A + sqrt(A² - 4B(1 - R/R0))) / 2B
//! ```

use latchkey_core::config::SamplerConfig;
use latchkey_core::traits::{SensorError, TemperatureSensor};
use latchkey_hal::ADC_MAX;

/// Callendar-Van Dusen coefficient A (IEC 60751)
const CVD_A: f32 = 3.9083e-3;
/// Callendar-Van Dusen coefficient B (IEC 60751)
const CVD_B: f32 = -5.775e-7;

/// RTD divider calibration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RtdDivider {
    /// ADC reference voltage in volts
    vref: f32,
    /// Reference resistor in ohms
    reference_ohms: f32,
    /// RTD resistance at 0°C in ohms
    r0_ohms: f32,
}

impl RtdDivider {
    /// Create a calibration
    ///
    /// # Arguments
    /// - `vref_mv`: ADC reference voltage in millivolts (typically 3300)
    /// - `reference_ohms`: Divider resistor between VREF and the RTD
    /// - `r0_ohms`: RTD resistance at 0°C (1000 for PT1000)
    pub fn new(vref_mv: u16, reference_ohms: u32, r0_ohms: u32) -> Self {
        Self {
            vref: vref_mv as f32 / 1000.0,
            reference_ohms: reference_ohms as f32,
            r0_ohms: r0_ohms as f32,
        }
    }

    /// PT1000 with a 7.5 kΩ reference at 3.3 V
    pub fn pt1000() -> Self {
        Self::new(3300, 7500, 1000)
    }

    pub fn from_config(config: &SamplerConfig) -> Self {
        Self::new(config.vref_mv, config.reference_ohms, config.r0_ohms)
    }

    /// Voltage at the ADC pin
    pub fn adc_to_volts(&self, raw: u16) -> f32 {
        raw as f32 * self.vref / ADC_MAX as f32
    }

    /// RTD resistance for a raw reading
    pub fn adc_to_resistance(&self, raw: u16) -> Result<f32, SensorError> {
        if raw > ADC_MAX {
            return Err(SensorError::OutOfRange);
        }
        let volts = self.adc_to_volts(raw);
        let across_ref = self.vref - volts;
        if across_ref <= 0.0 {
            // Open sensor, full-scale reading
            return Err(SensorError::OutOfRange);
        }
        Ok(self.reference_ohms * volts / across_ref)
    }

    /// Temperature for an RTD resistance
    pub fn resistance_to_celsius(&self, ohms: f32) -> Result<f32, SensorError> {
        let radicand = CVD_A * CVD_A - 4.0 * CVD_B * (1.0 - ohms / self.r0_ohms);
        if !radicand.is_finite() || radicand < 0.0 {
            return Err(SensorError::OutOfRange);
        }
        let celsius = (-CVD_A + libm::sqrtf(radicand)) / (2.0 * CVD_B);
        if !celsius.is_finite() {
            return Err(SensorError::ConversionError);
        }
        Ok(celsius)
    }
}

impl Default for RtdDivider {
    fn default() -> Self {
        Self::from_config(&SamplerConfig::default())
    }
}

impl TemperatureSensor for RtdDivider {
    fn to_celsius(&self, raw: u16) -> Result<f32, SensorError> {
        let ohms = self.adc_to_resistance(raw)?;
        self.resistance_to_celsius(ohms)
    }
}
