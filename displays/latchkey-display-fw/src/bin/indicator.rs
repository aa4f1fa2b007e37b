//! Latchkey Indicator Firmware
//!
//! Indicator node: an RGB LED behind an RP2040 acting as I2C target at the
//! indicator address. Colour changes are immediate, so bytes are dispatched
//! straight from the bus handler.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::i2c_slave::{Config as TargetConfig, I2cSlave};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use latchkey_display::{IndicatorDispatcher, SlaveReceiver};
use latchkey_drivers::indicator::RgbIndicator;
use latchkey_hal_rp2040::{RpI2cTarget, RpOutput};
use latchkey_protocol::INDICATOR_ADDRESS;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Latchkey indicator starting...");

    let p = embassy_rp::init(Default::default());

    // Common-anode LED: red GPIO13, green GPIO14, blue GPIO15
    let led = RgbIndicator::new_active_low(
        RpOutput(Output::new(p.PIN_13, Level::High)),
        RpOutput(Output::new(p.PIN_14, Level::High)),
        RpOutput(Output::new(p.PIN_15, Level::High)),
    );

    // I2C0 target: SDA GPIO0, SCL GPIO1
    let mut target_config = TargetConfig::default();
    target_config.addr = u16::from(INDICATOR_ADDRESS);
    let mut target = RpI2cTarget::new(I2cSlave::new(p.I2C0, p.PIN_1, p.PIN_0, Irqs, target_config));
    let mut receiver = SlaveReceiver::new(IndicatorDispatcher::new(led));

    info!("Listening at {=u8:#x}", INDICATOR_ADDRESS);
    loop {
        if let Err(e) = target.listen(|event| receiver.on_event(event)).await {
            warn!("I2C target error: {}", e);
            continue;
        }
        trace!(
            "transaction {}: {} -> {}",
            receiver.transactions(),
            receiver.last_byte(),
            receiver.dispatcher().indicator().color()
        );
    }
}
