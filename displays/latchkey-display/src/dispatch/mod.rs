//! Byte dispatchers
//!
//! A dispatcher is the application half of a peripheral node: it receives
//! each payload byte once, in bus order.

pub mod display;
pub mod indicator;

pub use display::DisplayDispatcher;
pub use indicator::IndicatorDispatcher;

/// Consumer of received payload bytes
pub trait Dispatcher {
    /// Handle one received byte
    fn dispatch(&mut self, byte: u8);
}

impl<D: Dispatcher + ?Sized> Dispatcher for &mut D {
    fn dispatch(&mut self, byte: u8) {
        (**self).dispatch(byte)
    }
}
