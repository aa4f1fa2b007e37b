//! Temperature sensor traits

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Reading out of expected range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
}

/// Trait for converting raw ADC readings to temperature
///
/// Implementations hold the sensor's calibration (divider, reference
/// voltage, sensor curve). The conversion itself is triggered elsewhere.
pub trait TemperatureSensor {
    /// Convert a raw 12-bit reading to degrees Celsius
    fn to_celsius(&self, raw: u16) -> Result<f32, SensorError>;
}
