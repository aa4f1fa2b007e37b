//! Shared I2C master
//!
//! The lock task (thread mode) and the sampler (interrupt executor) both
//! send on the one I2C peripheral. Each transaction runs inside its own
//! critical section, bounded by the master's timeout. The sampler sends a
//! whole report without yielding and preempts the lock task, so a report
//! is never interleaved with a key byte.

use core::cell::RefCell;

use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use latchkey_core::traits::{BusError, Transport};
use latchkey_drivers::bus::{I2cMaster, TransportStats};
use latchkey_hal_rp2040::RpI2cMaster;
use latchkey_protocol::Destination;

type Master = I2cMaster<RpI2cMaster<'static, I2C0>>;

static BUS: Mutex<CriticalSectionRawMutex, RefCell<Option<Master>>> =
    Mutex::new(RefCell::new(None));

/// Install the bus master; must run before any task is spawned
pub fn init(master: Master) {
    BUS.lock(|bus| bus.replace(Some(master)));
}

/// Counters of the shared master, if installed
pub fn stats() -> Option<TransportStats> {
    BUS.lock(|bus| bus.borrow().as_ref().map(|master| master.stats()))
}

/// Handle to the shared master
///
/// Zero-sized, so each task owns its own copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedTransport;

impl Transport for SharedTransport {
    fn send(&mut self, byte: u8, destination: Destination) -> Result<(), BusError> {
        BUS.lock(|bus| match bus.borrow_mut().as_mut() {
            Some(master) => master.send(byte, destination),
            None => Err(BusError::Bus),
        })
    }
}
