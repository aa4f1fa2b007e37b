//! Peripheral node logic for the lock's display and indicator
//!
//! This crate provides:
//! - `SlaveReceiver`, which turns I2C target events into dispatched bytes
//! - `DeferredReceiver` / `DispatchLoop`, the same split across an SPSC queue
//!   so interrupt context only enqueues
//! - `DisplayDispatcher`, driving a character LCD through `DisplaySink`
//! - `IndicatorDispatcher`, mapping bytes to indicator colours
//! - `Hd44780`, a 4-bit parallel character LCD `DisplaySink`
//! - `TextScreen`, an in-memory 2x16 `DisplaySink`
//!
//! # Architecture
//!
//! ```text
//!  I2C IRQ ──TargetEvent──▶ SlaveReceiver ──byte──▶ Dispatcher
//!                                                     ├─ DisplayDispatcher ─▶ DisplaySink
//!                                                     └─ IndicatorDispatcher ─▶ Indicator
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod backend;
pub mod dispatch;
pub mod hd44780;
pub mod queue;
pub mod receiver;
pub mod screen;

// Re-export key types
pub use backend::{DisplayError, DisplaySink, LINE_LEN, LINE_ONE, LINE_TWO};
pub use dispatch::{Dispatcher, DisplayDispatcher, IndicatorDispatcher};
pub use hd44780::Hd44780;
pub use queue::{DeferredReceiver, DispatchLoop};
pub use receiver::SlaveReceiver;
pub use screen::TextScreen;
