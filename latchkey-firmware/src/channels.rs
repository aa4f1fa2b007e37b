//! Inter-task communication
//!
//! The lock task and the sampler never talk to each other. These signals
//! only carry their latest results to the supervisor loop in `main`.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use latchkey_core::lock::{AttemptStats, Outcome};
use latchkey_core::sampling::{PipelineStats, TemperatureReport};

/// Most recent report sent to the display (updated by the sampler)
pub static LAST_REPORT: Signal<CriticalSectionRawMutex, TemperatureReport> = Signal::new();

/// Sampler counters (updated by the sampler after every completion)
pub static SAMPLER_STATS: Signal<CriticalSectionRawMutex, PipelineStats> = Signal::new();

/// Lock-state changes and their attempt counters (updated by the lock task)
pub static LOCK_ACTIVITY: Signal<CriticalSectionRawMutex, (Outcome, AttemptStats)> =
    Signal::new();
