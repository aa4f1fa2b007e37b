//! Board-agnostic core logic for the keypad lock controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (keypad, indicator, transport, temperature sensor)
//! - Key matrix and stored code
//! - Lock state machine and the controller loop around it
//! - Temperature sampling pipeline and report formatting
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod keypad;
pub mod lock;
pub mod sampling;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use keypad::{InvalidSymbol, KeyMatrix, Symbol, CODE_LEN, KEY_MATRIX, STORED_CODE};
