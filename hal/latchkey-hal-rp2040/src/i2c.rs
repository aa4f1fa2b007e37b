//! I2C master and target adapters
//!
//! The master call is synchronous: it spins on the async transfer until it
//! finishes or the per-transaction timeout passes, so a target stretching
//! SCL forever costs at most one timeout. The target side is async and
//! turns each transaction into the `Start`, `Received`, `Stop` event
//! sequence.

use embassy_rp::i2c::{self, AbortReason, Async, I2c};
use embassy_rp::i2c_slave::{self, Command, I2cSlave};
use embassy_time::{Duration, Instant};
use latchkey_hal::{poll_until, I2cBus, I2cError, TargetEvent};

/// Largest write a target accepts in one transaction
pub const TARGET_BUF_LEN: usize = 16;

fn map_abort(reason: AbortReason) -> I2cError {
    match reason {
        AbortReason::NoAcknowledge => I2cError::Nack,
        AbortReason::ArbitrationLoss => I2cError::ArbitrationLost,
        _ => I2cError::Bus,
    }
}

fn map_master_error(err: i2c::Error) -> I2cError {
    match err {
        i2c::Error::Abort(reason) => map_abort(reason),
        _ => I2cError::Bus,
    }
}

fn map_target_error(err: i2c_slave::Error) -> I2cError {
    match err {
        i2c_slave::Error::Abort(reason) => map_abort(reason),
        _ => I2cError::Bus,
    }
}

/// I2C master with a per-transaction timeout
pub struct RpI2cMaster<'d, T: i2c::Instance> {
    i2c: I2c<'d, T, Async>,
    timeout: Duration,
}

impl<'d, T: i2c::Instance> RpI2cMaster<'d, T> {
    /// Create a master
    ///
    /// # Arguments
    /// - `i2c`: Async driver, its interrupt bound by the caller
    /// - `timeout`: Longest a single write may take
    pub fn new(i2c: I2c<'d, T, Async>, timeout: Duration) -> Self {
        Self { i2c, timeout }
    }
}

impl<T: i2c::Instance> I2cBus for RpI2cMaster<'_, T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cError> {
        let deadline = Instant::now() + self.timeout;
        let transfer = self.i2c.write_async(u16::from(address), data.iter().copied());
        match poll_until(transfer, || Instant::now() >= deadline) {
            Some(result) => result.map_err(map_master_error),
            None => Err(I2cError::Timeout),
        }
    }
}

/// I2C target (slave) at a fixed address
pub struct RpI2cTarget<'d, T: i2c::Instance> {
    i2c: I2cSlave<'d, T>,
    buf: [u8; TARGET_BUF_LEN],
}

impl<'d, T: i2c::Instance> RpI2cTarget<'d, T> {
    pub fn new(i2c: I2cSlave<'d, T>) -> Self {
        Self {
            i2c,
            buf: [0; TARGET_BUF_LEN],
        }
    }

    /// Wait for the next transaction and report it as events
    ///
    /// Reads addressed to this node are answered with a single zero byte
    /// and produce no events.
    pub async fn listen<F: FnMut(TargetEvent)>(&mut self, mut on_event: F) -> Result<(), I2cError> {
        match self.i2c.listen(&mut self.buf).await.map_err(map_target_error)? {
            Command::Write(len) => {
                on_event(TargetEvent::Start);
                for &byte in &self.buf[..len] {
                    on_event(TargetEvent::Received(byte));
                }
                on_event(TargetEvent::Stop);
                Ok(())
            }
            Command::Read | Command::WriteRead(_) => {
                self.i2c
                    .respond_to_read(&[0])
                    .await
                    .map(|_| ())
                    .map_err(map_target_error)
            }
            Command::GeneralCall(_) => Ok(()),
        }
    }
}
