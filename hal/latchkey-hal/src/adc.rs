//! Analog input abstractions
//!
//! The temperature channel is sampled asynchronously: a timer starts a
//! conversion and the ADC's completion interrupt delivers the result. The
//! result value is handed to the sampling pipeline by the interrupt handler,
//! so the trait only covers the trigger side.

/// Resolution of the analog front end in bits
pub const ADC_BITS: u8 = 12;

/// Largest raw reading a 12-bit conversion can produce
pub const ADC_MAX: u16 = (1 << ADC_BITS) - 1;

/// Starts single analog conversions
pub trait AdcTrigger {
    /// Begin one conversion on the configured channel
    ///
    /// Must not block; the result arrives through the completion interrupt.
    fn start_conversion(&mut self);
}
