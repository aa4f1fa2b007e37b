//! RP2040-specific HAL for the keypad lock firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `latchkey-hal` traits on top of `embassy-rp`:
//!
//! - GPIO output and input pins
//! - I2C master with a transaction timeout and interrupt-driven I2C target
//! - ADC conversions started by the sampling timer

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;

pub use adc::RpAdc;
pub use gpio::{RpInput, RpOutput};
pub use i2c::{RpI2cMaster, RpI2cTarget};
