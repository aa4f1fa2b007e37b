//! Embassy async tasks
//!
//! The lock task runs on the thread-mode executor. The sampler runs on an
//! interrupt executor so a held key never delays a conversion.

pub mod lock;
pub mod sampler;

pub use lock::{lock_task, Controller};
pub use sampler::sampler_task;
