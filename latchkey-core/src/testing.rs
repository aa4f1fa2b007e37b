//! Test doubles shared by the unit tests

use heapless::Vec;
use latchkey_hal::AdcTrigger;
use latchkey_protocol::{BusMessage, Destination, IndicatorColor};

use crate::keypad::Symbol;
use crate::traits::{
    BusError, Indicator, Keypad, SensorError, TemperatureSensor, Transport,
};

pub fn symbols(keys: &[u8]) -> Vec<Symbol, 32> {
    keys.iter()
        .map(|&b| Symbol::from_byte(b).expect("not a keypad symbol"))
        .collect()
}

/// Transport that records every delivered message
pub struct RecordingTransport {
    sent: Vec<BusMessage, 256>,
    attempts: usize,
    fail: Option<(usize, BusError)>,
    once: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            attempts: 0,
            fail: None,
            once: false,
        }
    }

    /// Deliver `ok` more bytes, then fail every send with `error`
    pub fn fail_after(&mut self, ok: usize, error: BusError) {
        self.fail = Some((self.attempts + ok, error));
        self.once = false;
    }

    /// Deliver `ok` more bytes, fail the next send, then recover
    pub fn fail_once_after(&mut self, ok: usize, error: BusError) {
        self.fail = Some((self.attempts + ok, error));
        self.once = true;
    }

    pub fn heal(&mut self) {
        self.fail = None;
    }

    pub fn messages(&self) -> &[BusMessage] {
        &self.sent
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn bytes_to(&self, destination: Destination) -> Vec<u8, 256> {
        self.sent
            .iter()
            .filter(|m| m.destination == destination)
            .map(|m| m.byte)
            .collect()
    }

    pub fn clear(&mut self) {
        self.sent.clear();
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, byte: u8, destination: Destination) -> Result<(), BusError> {
        let attempt = self.attempts;
        self.attempts += 1;
        if let Some((from, error)) = self.fail {
            if attempt >= from {
                if self.once {
                    self.fail = None;
                }
                return Err(error);
            }
        }
        self.sent
            .push(BusMessage::new(byte, destination))
            .expect("recording full");
        Ok(())
    }
}

/// Indicator that records every colour change
pub struct RecordingIndicator {
    pub colors: Vec<IndicatorColor, 64>,
}

impl RecordingIndicator {
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn last(&self) -> Option<IndicatorColor> {
        self.colors.last().copied()
    }
}

impl Indicator for RecordingIndicator {
    fn set_color(&mut self, color: IndicatorColor) {
        self.colors.push(color).expect("recording full");
    }
}

/// Keypad that replays a fixed key sequence, then reports no keys
pub struct ScriptedKeypad {
    keys: Vec<Symbol, 32>,
    next: usize,
}

impl ScriptedKeypad {
    pub fn new(keys: &[u8]) -> Self {
        Self {
            keys: symbols(keys),
            next: 0,
        }
    }
}

impl Keypad for ScriptedKeypad {
    fn scan_once<I: Indicator + ?Sized>(&mut self, indicator: &mut I) -> Option<Symbol> {
        let key = *self.keys.get(self.next)?;
        self.next += 1;
        indicator.set_color(IndicatorColor::Accept);
        Some(key)
    }
}

/// ADC that counts conversion requests
pub struct CountingAdc {
    pub started: usize,
}

impl CountingAdc {
    pub fn new() -> Self {
        Self { started: 0 }
    }
}

impl AdcTrigger for CountingAdc {
    fn start_conversion(&mut self) {
        self.started += 1;
    }
}

/// Sensor reading `raw / 10` °C, rejecting raw 4000 and above
pub struct TenthsSensor;

impl TemperatureSensor for TenthsSensor {
    fn to_celsius(&self, raw: u16) -> Result<f32, SensorError> {
        if raw >= 4000 {
            return Err(SensorError::OutOfRange);
        }
        Ok(raw as f32 / 10.0)
    }
}
