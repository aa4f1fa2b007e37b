//! Lock controller loop
//!
//! Scans the keypad, accumulates code symbols and, depending on the lock
//! state, either verifies them or forwards them to the peripherals.
//!
//! Peripheral writes are fire-and-forget: a failed send is logged and the
//! controller carries on. Fan-out always goes to the indicator node first,
//! then the display node.

use latchkey_protocol::{BusMessage, Destination, IndicatorColor, CLEAR_DISPLAY, RESET};

use super::code::EnteredCode;
use super::events::Event;
use super::machine::LockState;
use crate::config::LockConfig;
use crate::keypad::Symbol;
use crate::traits::{Indicator, Keypad, Transport};

/// Result of one controller step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// No key was pressed
    Idle,
    /// A code symbol was stored
    KeyAccepted {
        /// Symbols entered so far
        entered: usize,
    },
    /// The entered code matched
    Unlocked,
    /// The entered code did not match
    Denied,
    /// A key was forwarded to the peripherals
    Forwarded(Symbol),
    /// The release key re-locked the controller
    Locked,
}

/// Unlock attempt counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AttemptStats {
    /// Codes that matched
    pub granted: u32,
    /// Codes that did not match
    pub denied: u32,
}

/// Keypad lock controller
pub struct LockController<K, I, T> {
    keypad: K,
    indicator: I,
    transport: T,
    config: LockConfig,
    state: LockState,
    entered: EnteredCode,
    stats: AttemptStats,
}

impl<K, I, T> LockController<K, I, T>
where
    K: Keypad,
    I: Indicator,
    T: Transport,
{
    /// Create a locked controller
    pub fn new(keypad: K, indicator: I, transport: T, config: LockConfig) -> Self {
        Self {
            keypad,
            indicator,
            transport,
            config,
            state: LockState::CollectingCode,
            entered: EnteredCode::new(),
            stats: AttemptStats::default(),
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn entered(&self) -> &EnteredCode {
        &self.entered
    }

    pub fn stats(&self) -> AttemptStats {
        self.stats
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Scan the keypad once and handle any key
    pub fn step(&mut self) -> Outcome {
        match self.keypad.scan_once(&mut self.indicator) {
            Some(symbol) => self.handle_symbol(symbol),
            None => Outcome::Idle,
        }
    }

    /// Run the controller forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Handle one debounced key
    pub fn handle_symbol(&mut self, symbol: Symbol) -> Outcome {
        match self.state {
            LockState::CollectingCode => self.collect(symbol),
            LockState::Unlocked => self.forward(symbol),
        }
    }

    fn collect(&mut self, symbol: Symbol) -> Outcome {
        if !self.entered.push(symbol) {
            trace!("code symbol {}/{}", self.entered.len(), self.config.code.len());
            return Outcome::KeyAccepted {
                entered: self.entered.len(),
            };
        }

        let matched = self.entered.matches(&self.config.code);
        self.entered.clear();

        if matched {
            info!("code accepted");
            self.stats.granted = self.stats.granted.saturating_add(1);
            self.indicator.set_color(IndicatorColor::Unlocked);
            self.send(BusMessage::to_display(CLEAR_DISPLAY));
            self.state = self.state.transition(Event::CodeAccepted);
            Outcome::Unlocked
        } else {
            self.stats.denied = self.stats.denied.saturating_add(1);
            warn!("code rejected ({} denied)", self.stats.denied);
            self.indicator.set_color(IndicatorColor::Denied);
            self.broadcast(RESET);
            self.state = self.state.transition(Event::CodeRejected);
            Outcome::Denied
        }
    }

    fn forward(&mut self, symbol: Symbol) -> Outcome {
        if symbol.is_release() {
            info!("release key, locking");
            self.indicator.set_color(IndicatorColor::Locked);
            self.broadcast(symbol.byte());
            self.state = self.state.transition(Event::ReleaseKey);
            Outcome::Locked
        } else {
            self.broadcast(symbol.byte());
            Outcome::Forwarded(symbol)
        }
    }

    /// Send a byte to the indicator node, then the display node
    fn broadcast(&mut self, byte: u8) {
        for destination in Destination::ALL {
            self.send(BusMessage::new(byte, destination));
        }
    }

    fn send(&mut self, message: BusMessage) {
        if let Err(e) = self.transport.send_message(message) {
            warn!("send {} failed: {}", message, e);
        }
    }
}
