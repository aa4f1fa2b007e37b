//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in latchkey-core on top of the latchkey-hal capabilities:
//!
//! - Keypad (pin-backed matrix, debounced scanner)
//! - Bus (I2C master transport)
//! - Temperature sensor (RTD divider calibration)
//! - Indicator (RGB LED on three GPIOs)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod bus;
pub mod indicator;
pub mod keypad;
pub mod sensor;
