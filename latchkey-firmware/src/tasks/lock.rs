//! Lock task
//!
//! Owns the keypad, the status LED and a handle to the shared bus, and
//! runs the lock controller forever. A scan blocks while a key is held,
//! so the task yields between scans to let the supervisor run.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Delay;

use latchkey_core::lock::{LockController, Outcome};
use latchkey_drivers::indicator::RgbIndicator;
use latchkey_drivers::keypad::{DebouncedScanner, PinMatrix};
use latchkey_hal_rp2040::{RpInput, RpOutput};

use crate::bus::SharedTransport;
use crate::channels::LOCK_ACTIVITY;

/// Keypad scanner wired to GPIO rows and columns
pub type Scanner = DebouncedScanner<PinMatrix<RpInput<'static>, RpOutput<'static>>, Delay>;

/// Status LED on three GPIOs
pub type StatusLed = RgbIndicator<RpOutput<'static>, RpOutput<'static>, RpOutput<'static>>;

/// Lock controller as wired on the board
pub type Controller = LockController<Scanner, StatusLed, SharedTransport>;

#[embassy_executor::task]
pub async fn lock_task(mut controller: Controller) {
    info!("Lock task started, state {}", controller.state());

    loop {
        let outcome = controller.step();
        match outcome {
            Outcome::Idle => {}
            Outcome::KeyAccepted { entered } => trace!("{} digits entered", entered),
            Outcome::Forwarded(symbol) => trace!("forwarded {}", symbol),
            Outcome::Unlocked | Outcome::Denied | Outcome::Locked => {
                LOCK_ACTIVITY.signal((outcome, controller.stats()));
            }
        }
        yield_now().await;
    }
}
