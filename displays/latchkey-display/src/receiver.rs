//! I2C slave receiver
//!
//! Runs in the bus interrupt. Each received byte is handed to the
//! dispatcher before the handler returns, so dispatch work is done in
//! interrupt context; see [`crate::queue`] for the deferred variant.

use latchkey_hal::TargetEvent;

use crate::dispatch::Dispatcher;

/// Receives payload bytes addressed to this node
pub struct SlaveReceiver<D> {
    dispatcher: D,
    /// Byte of the transaction in progress
    pending: Option<u8>,
    last: Option<u8>,
    received: u32,
    transactions: u32,
}

impl<D: Dispatcher> SlaveReceiver<D> {
    pub fn new(dispatcher: D) -> Self {
        Self {
            dispatcher,
            pending: None,
            last: None,
            received: 0,
            transactions: 0,
        }
    }

    /// Handle one bus event
    pub fn on_event(&mut self, event: TargetEvent) {
        match event {
            TargetEvent::Start => {
                self.pending = None;
            }
            TargetEvent::Received(byte) => {
                if self.pending.is_some() {
                    trace!("more than one byte in a transaction");
                }
                self.pending = Some(byte);
                self.last = Some(byte);
                self.received = self.received.wrapping_add(1);
                self.dispatcher.dispatch(byte);
            }
            TargetEvent::Stop => {
                if self.pending.take().is_some() {
                    self.transactions = self.transactions.wrapping_add(1);
                }
            }
        }
    }

    /// Most recently received byte
    pub fn last_byte(&self) -> Option<u8> {
        self.last
    }

    /// Bytes received since start-up
    pub fn received(&self) -> u32 {
        self.received
    }

    /// Completed transactions that carried data
    pub fn transactions(&self) -> u32 {
        self.transactions
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }
}
