//! Keypad trait

use super::Indicator;
use crate::keypad::Symbol;

/// Trait for a scanned, debounced keypad
pub trait Keypad {
    /// Scan every column once
    ///
    /// Returns the first debounced key in scan order, after it has been
    /// released, or `None` when no key is pressed. The scanner flashes
    /// [`IndicatorColor::Accept`](latchkey_protocol::IndicatorColor::Accept)
    /// on `indicator` as soon as a press is confirmed.
    ///
    /// Blocks for the settle and debounce delays and for as long as the
    /// key is held.
    fn scan_once<I: Indicator + ?Sized>(&mut self, indicator: &mut I) -> Option<Symbol>;
}
