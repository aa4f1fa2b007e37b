//! GPIO pin abstractions
//!
//! Keypad columns and indicator LED channels are outputs, keypad rows are
//! inputs with pull-ups.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to the given level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Whether the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Whether the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Whether the pin reads low (logic 0)
    ///
    /// Keypad rows are pulled up, so a pressed key reads low.
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
