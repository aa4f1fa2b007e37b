//! Lock state machine and controller
//!
//! The state machine is explicit, finite, and deterministic. The controller
//! owns the entered code and the current state and turns keypad input into
//! indicator colours and bus messages.

pub mod code;
pub mod controller;
pub mod events;
pub mod machine;

pub use code::EnteredCode;
pub use controller::{AttemptStats, LockController, Outcome};
pub use events::Event;
pub use machine::LockState;
