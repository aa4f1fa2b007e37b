//! Temperature sampling pipeline
//!
//! A periodic timer starts one ADC conversion; the completion handler
//! converts the reading and buffers it. Every third reading the buffer is
//! averaged and the result is sent to the display node as a text report.

pub mod buffer;
pub mod pipeline;
pub mod report;

pub use buffer::{SampleBuffer, SAMPLE_WINDOW};
pub use pipeline::{Completion, PipelineState, PipelineStats, TemperaturePipeline};
pub use report::{TemperatureReport, REPORT_LEN};
