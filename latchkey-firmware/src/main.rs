//! Latchkey - Keypad Lock Controller Firmware
//!
//! Controller node for RP2040-based boards. Scans a 4x4 keypad, checks the
//! entered code and drives the indicator and display nodes over I2C. A
//! timer-driven sampler reports the averaged RTD temperature to the
//! display between key presses.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::interrupt::{self, InterruptExt, Priority};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use latchkey_core::config::ControllerConfig;
use latchkey_core::lock::LockController;
use latchkey_drivers::bus::I2cMaster;
use latchkey_drivers::indicator::RgbIndicator;
use latchkey_drivers::keypad::{DebouncedScanner, PinMatrix};
use latchkey_hal_rp2040::{RpAdc, RpI2cMaster, RpInput, RpOutput};

use crate::bus::SharedTransport;
use crate::channels::{LAST_REPORT, LOCK_ACTIVITY, SAMPLER_STATS};

mod bus;
mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

/// Executor for the sampler, preempts the thread-mode lock task
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Latchkey controller starting...");

    let config = ControllerConfig::default();
    let p = embassy_rp::init(Default::default());

    // I2C0 master: SDA GPIO0, SCL GPIO1
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = config.bus.frequency_hz;
    let i2c = I2c::new_async(p.I2C0, p.PIN_1, p.PIN_0, Irqs, i2c_config);
    let timeout = Duration::from_micros(u64::from(config.bus.timeout_us));
    bus::init(I2cMaster::new(RpI2cMaster::new(i2c, timeout)));
    info!(
        "I2C master at {} Hz, {} us timeout",
        config.bus.frequency_hz, config.bus.timeout_us
    );

    // Keypad: rows GPIO2-5 with pull-ups, columns GPIO6-9 idle high
    let rows = [
        RpInput(Input::new(p.PIN_2, Pull::Up)),
        RpInput(Input::new(p.PIN_3, Pull::Up)),
        RpInput(Input::new(p.PIN_4, Pull::Up)),
        RpInput(Input::new(p.PIN_5, Pull::Up)),
    ];
    let cols = [
        RpOutput(Output::new(p.PIN_6, Level::High)),
        RpOutput(Output::new(p.PIN_7, Level::High)),
        RpOutput(Output::new(p.PIN_8, Level::High)),
        RpOutput(Output::new(p.PIN_9, Level::High)),
    ];
    let scanner = DebouncedScanner::new(PinMatrix::new(rows, cols), Delay, config.keypad);

    // Status LED: red GPIO13, green GPIO14, blue GPIO15
    let status_led = RgbIndicator::new_active_high(
        RpOutput(Output::new(p.PIN_13, Level::Low)),
        RpOutput(Output::new(p.PIN_14, Level::Low)),
        RpOutput(Output::new(p.PIN_15, Level::Low)),
    );

    let controller: tasks::Controller =
        LockController::new(scanner, status_led, SharedTransport, config.lock);

    // RTD divider on ADC0 (GPIO26)
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let rtd_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let adc = RpAdc::new(adc, rtd_channel);

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner
        .spawn(tasks::sampler_task(adc, config.sampler))
        .unwrap();
    spawner.spawn(tasks::lock_task(controller)).unwrap();

    info!("All tasks spawned, controller running");

    loop {
        if let Some((outcome, attempts)) = LOCK_ACTIVITY.try_take() {
            info!(
                "{} ({} granted, {} denied)",
                outcome, attempts.granted, attempts.denied
            );
        }
        if let Some(report) = LAST_REPORT.try_take() {
            info!("{}", report.as_str());
        }
        if let Some(stats) = SAMPLER_STATS.try_take() {
            trace!("sampler {}", stats);
        }
        if let Some(stats) = bus::stats() {
            trace!("bus {} sent, {} failed", stats.sent, stats.failed);
        }
        Timer::after_secs(1).await;
    }
}
