//! Status indicator trait

use latchkey_protocol::IndicatorColor;

/// Trait for the controller's own status light
pub trait Indicator {
    /// Show a colour until the next call
    fn set_color(&mut self, color: IndicatorColor);
}

impl<I: Indicator + ?Sized> Indicator for &mut I {
    fn set_color(&mut self, color: IndicatorColor) {
        (**self).set_color(color)
    }
}
