//! I2C bus abstractions
//!
//! The controller node is the only master on the bus. It writes single
//! bytes to fixed 7-bit target addresses; the peripheral nodes see the same
//! traffic as a stream of [`TargetEvent`]s raised from their bus interrupt.

/// Errors reported by an I2C master transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Address or data byte was not acknowledged
    Nack,
    /// Transaction did not complete within the bus timeout
    Timeout,
    /// Another device drove the bus during our transaction
    ArbitrationLost,
    /// Any other bus fault (misplaced START/STOP, overrun, ...)
    Bus,
}

/// I2C bus master
///
/// `write` performs a complete START, address, data, STOP transaction and
/// blocks until it completes or the implementation's timeout bound expires.
pub trait I2cBus {
    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cError>;
}

/// Event seen by an I2C target (slave) node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TargetEvent {
    /// START condition addressed to this node
    Start,
    /// A data byte was received and acknowledged
    Received(u8),
    /// STOP condition ended the transaction
    Stop,
}
