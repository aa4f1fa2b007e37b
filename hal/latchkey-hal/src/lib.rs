//! Latchkey Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the lock controller and the
//! peripheral nodes are written against. Chip-specific HALs implement them,
//! and host tests implement them with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  latchkey-core / latchkey-drivers / display  │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  latchkey-hal (this crate - traits)          │
//! └──────────────────────────────────────────────┘
//!                      │
//!           ┌──────────┴──────────┐
//!           ▼                     ▼
//! ┌───────────────────┐   ┌───────────────────┐
//! │ latchkey-hal-     │   │ host test fakes   │
//! │   rp2040          │   │                   │
//! └───────────────────┘   └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`keypad::KeypadMatrix`] - Row/column keypad matrix
//! - [`i2c::I2cBus`] - I2C master writes
//! - [`i2c::TargetEvent`] - I2C target (slave) bus events
//! - [`adc::AdcTrigger`] - Interrupt-driven analog conversions
//!
//! [`deadline::poll_until`] bounds a transfer future by a deadline check.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod deadline;
pub mod gpio;
pub mod i2c;
pub mod keypad;

// Re-export key traits at crate root for convenience
pub use adc::{AdcTrigger, ADC_MAX};
pub use deadline::poll_until;
pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cError, TargetEvent};
pub use keypad::{KeypadMatrix, KEYPAD_COLS, KEYPAD_ROWS};
