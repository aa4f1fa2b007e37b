//! Indicator node dispatcher

use latchkey_core::traits::Indicator;
use latchkey_protocol::IndicatorColor;

use super::Dispatcher;

/// Shows a colour for every received byte
pub struct IndicatorDispatcher<I> {
    indicator: I,
}

impl<I: Indicator> IndicatorDispatcher<I> {
    pub fn new(indicator: I) -> Self {
        Self { indicator }
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }
}

impl<I: Indicator> Dispatcher for IndicatorDispatcher<I> {
    fn dispatch(&mut self, byte: u8) {
        let color = IndicatorColor::from_byte(byte);
        trace!("indicator {=u8:#x} -> {}", byte, color);
        self.indicator.set_color(color);
    }
}
