//! Collaborator traits
//!
//! These traits define the interface between the lock and sampling logic
//! and hardware-specific implementations.

pub mod indicator;
pub mod keypad;
pub mod sensor;
pub mod transport;

pub use indicator::Indicator;
pub use keypad::Keypad;
pub use sensor::{SensorError, TemperatureSensor};
pub use transport::{BusError, SendError, Transport};
