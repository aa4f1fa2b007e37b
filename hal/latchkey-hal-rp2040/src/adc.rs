//! ADC conversions
//!
//! RP2040 has a single ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! `start_conversion` only records the request; the conversion runs when
//! the sampling task awaits [`RpAdc::complete`], which sleeps until the
//! ADC FIFO interrupt delivers the result.

use embassy_rp::adc::{self, Adc, Async, Channel};
use latchkey_hal::AdcTrigger;

/// Single-channel ADC
pub struct RpAdc<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
    requested: bool,
}

impl<'d> RpAdc<'d> {
    pub fn new(adc: Adc<'d, Async>, channel: Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            requested: false,
        }
    }

    /// Run the requested conversion
    ///
    /// Returns `None` if no conversion was requested.
    pub async fn complete(&mut self) -> Option<Result<u16, adc::Error>> {
        if !core::mem::take(&mut self.requested) {
            return None;
        }
        Some(self.adc.read(&mut self.channel).await)
    }
}

impl AdcTrigger for RpAdc<'_> {
    fn start_conversion(&mut self) {
        self.requested = true;
    }
}
