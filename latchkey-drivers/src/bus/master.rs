//! I2C master transport
//!
//! Each payload byte is written in its own transaction to the destination's
//! fixed address. Errors from the bus are returned to the caller unchanged
//! apart from the `I2cError` to `BusError` mapping; there is no queueing
//! and no retry.

use latchkey_core::traits::{BusError, Transport};
use latchkey_hal::I2cBus;
use latchkey_protocol::Destination;

/// Transaction counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportStats {
    /// Bytes acknowledged by a peripheral
    pub sent: u32,
    /// Transactions that failed
    pub failed: u32,
}

/// Single-master I2C transport
pub struct I2cMaster<B> {
    bus: B,
    stats: TransportStats,
}

impl<B: I2cBus> I2cMaster<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            stats: TransportStats::default(),
        }
    }

    pub fn stats(&self) -> TransportStats {
        self.stats
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Release the bus
    pub fn free(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> Transport for I2cMaster<B> {
    fn send(&mut self, byte: u8, destination: Destination) -> Result<(), BusError> {
        match self.bus.write(destination.address(), &[byte]) {
            Ok(()) => {
                self.stats.sent = self.stats.sent.wrapping_add(1);
                Ok(())
            }
            Err(e) => {
                self.stats.failed = self.stats.failed.wrapping_add(1);
                trace!("write to {=u8:#x} failed: {}", destination.address(), e);
                Err(e.into())
            }
        }
    }
}
