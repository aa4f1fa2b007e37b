//! Latchkey Display Firmware
//!
//! Display node: an HD44780 16x2 character LCD behind an RP2040 acting as
//! I2C target at the display address. Bytes are queued from the bus
//! handler and decoded in thread mode, since LCD writes are slow.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::i2c_slave::{Config as TargetConfig, I2cSlave};
use embassy_rp::interrupt::{self, InterruptExt, Priority};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Delay;
use heapless::spsc::Queue;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use latchkey_display::queue::{split, DeferredReceiver};
use latchkey_display::{DisplayDispatcher, Hd44780};
use latchkey_hal_rp2040::{RpI2cTarget, RpOutput};
use latchkey_protocol::DISPLAY_ADDRESS;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

/// Bytes the bus handler may run ahead of the LCD
const QUEUE_LEN: usize = 32;

static QUEUE: StaticCell<Queue<u8, QUEUE_LEN>> = StaticCell::new();

/// Signalled after every completed bus transaction
static BYTES_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Executor for the bus handler, preempts LCD updates
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Receive transactions and queue their bytes
#[embassy_executor::task]
async fn bus_task(
    mut target: RpI2cTarget<'static, I2C0>,
    mut receiver: DeferredReceiver<'static, QUEUE_LEN>,
) {
    info!("Listening at {=u8:#x}", DISPLAY_ADDRESS);
    let mut dropped = 0;
    loop {
        match target.listen(|event| receiver.on_event(event)).await {
            Ok(()) => BYTES_READY.signal(()),
            Err(e) => warn!("I2C target error: {}", e),
        }
        if receiver.dropped() != dropped {
            dropped = receiver.dropped();
            warn!("queue full, {} bytes dropped", dropped);
        }
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Latchkey display starting...");

    let p = embassy_rp::init(Default::default());

    // LCD: RS GPIO2, EN GPIO3, D4-D7 GPIO4-7
    let mut lcd = Hd44780::new(
        RpOutput(Output::new(p.PIN_2, Level::Low)),
        RpOutput(Output::new(p.PIN_3, Level::Low)),
        [
            RpOutput(Output::new(p.PIN_4, Level::Low)),
            RpOutput(Output::new(p.PIN_5, Level::Low)),
            RpOutput(Output::new(p.PIN_6, Level::Low)),
            RpOutput(Output::new(p.PIN_7, Level::Low)),
        ],
        Delay,
    );
    if let Err(e) = lcd.init() {
        warn!("LCD init failed: {}", e);
    }

    // I2C0 target: SDA GPIO0, SCL GPIO1
    let mut target_config = TargetConfig::default();
    target_config.addr = u16::from(DISPLAY_ADDRESS);
    let target = RpI2cTarget::new(I2cSlave::new(p.I2C0, p.PIN_1, p.PIN_0, Irqs, target_config));

    let queue = QUEUE.init(Queue::new());
    let (receiver, mut dispatch) = split(queue, DisplayDispatcher::new(lcd));

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(bus_task(target, receiver)).unwrap();

    info!("Display running");

    let mut errors = 0;
    loop {
        BYTES_READY.wait().await;
        dispatch.drain();

        let now = dispatch.dispatcher().errors();
        if now != errors {
            warn!("{} LCD write errors", now);
            errors = now;
        }
    }
}
