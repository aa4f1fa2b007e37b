//! Three-channel RGB LED
//!
//! Each channel is one GPIO. Common-anode LEDs light a channel when its
//! pin is low; use [`RgbIndicator::new_active_low`] for those.

use latchkey_core::traits::Indicator;
use latchkey_hal::OutputPin;
use latchkey_protocol::IndicatorColor;

/// RGB LED on three output pins
pub struct RgbIndicator<R, G, B> {
    red: R,
    green: G,
    blue: B,
    /// If true, channel ON = pin LOW
    inverted: bool,
    color: IndicatorColor,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> RgbIndicator<R, G, B> {
    /// Create an indicator, initially off
    ///
    /// # Arguments
    /// - `inverted`: If true, a channel is lit when its pin is LOW
    pub fn new(red: R, green: G, blue: B, inverted: bool) -> Self {
        let mut indicator = Self {
            red,
            green,
            blue,
            inverted,
            color: IndicatorColor::Off,
        };
        indicator.set_color(IndicatorColor::Off);
        indicator
    }

    /// Create an indicator for a common-cathode LED
    pub fn new_active_high(red: R, green: G, blue: B) -> Self {
        Self::new(red, green, blue, false)
    }

    /// Create an indicator for a common-anode LED
    pub fn new_active_low(red: R, green: G, blue: B) -> Self {
        Self::new(red, green, blue, true)
    }

    /// Colour currently shown
    pub fn color(&self) -> IndicatorColor {
        self.color
    }

    pub fn off(&mut self) {
        self.set_color(IndicatorColor::Off);
    }
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> Indicator for RgbIndicator<R, G, B> {
    fn set_color(&mut self, color: IndicatorColor) {
        let (r, g, b) = color.rgb();
        self.red.set_state(r != self.inverted);
        self.green.set_state(g != self.inverted);
        self.blue.set_state(b != self.inverted);
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn levels(led: &RgbIndicator<MockPin, MockPin, MockPin>) -> (bool, bool, bool) {
        (
            led.red.is_set_high(),
            led.green.is_set_high(),
            led.blue.is_set_high(),
        )
    }

    #[test]
    fn test_starts_off() {
        let led = RgbIndicator::new_active_high(MockPin::default(), MockPin::default(), MockPin::default());
        assert_eq!(led.color(), IndicatorColor::Off);
        assert_eq!(levels(&led), (false, false, false));
    }

    #[test]
    fn test_colours() {
        let mut led = RgbIndicator::new_active_high(MockPin::default(), MockPin::default(), MockPin::default());

        led.set_color(IndicatorColor::Accept);
        assert_eq!(levels(&led), (true, true, false));

        led.set_color(IndicatorColor::Unlocked);
        assert_eq!(levels(&led), (false, false, true));

        led.set_color(IndicatorColor::Denied);
        assert_eq!(levels(&led), (true, false, false));
        assert_eq!(led.color(), IndicatorColor::Denied);
    }

    #[test]
    fn test_active_low() {
        let mut led = RgbIndicator::new_active_low(MockPin::default(), MockPin::default(), MockPin::default());
        assert_eq!(levels(&led), (true, true, true));

        led.set_color(IndicatorColor::Locked);
        assert_eq!(levels(&led), (false, true, true));

        led.off();
        assert_eq!(levels(&led), (true, true, true));
    }
}
