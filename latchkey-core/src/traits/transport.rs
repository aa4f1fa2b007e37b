//! Bus transport trait

use latchkey_hal::I2cError;
use latchkey_protocol::{BusMessage, Destination};

/// Errors from a single bus transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// No peripheral acknowledged the address or payload
    Nack,
    /// Transaction did not complete within the bus timeout
    Timeout,
    /// Another driver took the bus mid-transaction
    ArbitrationLost,
    /// Any other bus fault
    Bus,
}

impl From<I2cError> for BusError {
    fn from(err: I2cError) -> Self {
        match err {
            I2cError::Nack => BusError::Nack,
            I2cError::Timeout => BusError::Timeout,
            I2cError::ArbitrationLost => BusError::ArbitrationLost,
            I2cError::Bus => BusError::Bus,
        }
    }
}

/// Failure part way through a multi-byte send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SendError {
    /// Bytes delivered before the failure
    pub sent: usize,
    /// Error from the failing transaction
    pub error: BusError,
}

/// Trait for the master side of the peripheral bus
///
/// Every call is one complete bus transaction carrying one payload byte.
/// Calls complete in order, so bytes to the same destination arrive in the
/// order they were sent.
pub trait Transport {
    /// Send one byte to a peripheral
    fn send(&mut self, byte: u8, destination: Destination) -> Result<(), BusError>;

    /// Send a prepared message
    fn send_message(&mut self, message: BusMessage) -> Result<(), BusError> {
        self.send(message.byte, message.destination)
    }

    /// Send bytes one transaction at a time, stopping at the first failure
    fn send_all(&mut self, bytes: &[u8], destination: Destination) -> Result<(), SendError> {
        for (sent, &byte) in bytes.iter().enumerate() {
            self.send(byte, destination)
                .map_err(|error| SendError { sent, error })?;
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, byte: u8, destination: Destination) -> Result<(), BusError> {
        (**self).send(byte, destination)
    }

    fn send_all(&mut self, bytes: &[u8], destination: Destination) -> Result<(), SendError> {
        (**self).send_all(bytes, destination)
    }
}
