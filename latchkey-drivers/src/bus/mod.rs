//! Peripheral bus drivers

pub mod master;

pub use master::{I2cMaster, TransportStats};
