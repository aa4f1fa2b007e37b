//! Latchkey I2C Byte Protocol
//!
//! This crate defines what travels on the bus between the lock controller
//! (the only master) and its two peripheral nodes. Every application message
//! is exactly one payload byte in its own bus transaction:
//!
//! ```text
//! ┌───────┬──────────────┬─────┬─────────┬─────┬──────┐
//! │ START │ ADDRESS (7b) │ W   │ PAYLOAD │ ACK │ STOP │
//! └───────┴──────────────┴─────┴─────────┴─────┴──────┘
//! ```
//!
//! Multi-byte content such as the temperature report is a sequence of such
//! transactions to one destination. Ordering is preserved per destination
//! only because the master sends them back to back.
//!
//! Payload bytes are keypad symbols, a handful of control bytes, or
//! characters of a text run (see [`display::DisplayDecoder`]).

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod address;
pub mod display;
pub mod indicator;
pub mod message;

pub use address::{Destination, DISPLAY_ADDRESS, INDICATOR_ADDRESS};
pub use display::{DisplayCommand, DisplayDecoder, MenuMode};
pub use indicator::IndicatorColor;
pub use message::{BusMessage, CLEAR_DISPLAY, RELEASE_KEY, RESET};
