//! Sampling pipeline state machine
//!
//! Both entry points are meant to be called from the sampling context only
//! (timer interrupt and ADC completion); the pipeline shares nothing with
//! the lock controller apart from the transport.

use latchkey_hal::{AdcTrigger, ADC_MAX};
use latchkey_protocol::{Destination, RESET};

use super::buffer::SampleBuffer;
use super::report::TemperatureReport;
use crate::traits::{SendError, SensorError, TemperatureSensor, Transport};

/// Pipeline states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PipelineState {
    /// Waiting for the next timer tick
    #[default]
    Idle,
    /// Conversion in flight
    Sampling,
    /// Window full, report being produced
    Averaging,
}

/// Result of handling a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Completion {
    /// Reading stored, window not yet full
    Buffered {
        /// Readings in the window
        count: usize,
    },
    /// Reading could not be converted and was discarded
    Rejected(SensorError),
    /// Window averaged and the report delivered
    Reported(TemperatureReport),
    /// Window averaged but the report was cut short by a bus error
    ReportFailed {
        report: TemperatureReport,
        error: SendError,
    },
    /// No conversion was in flight
    Spurious,
}

/// Pipeline counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PipelineStats {
    /// Reports fully delivered
    pub reports: u32,
    /// Reports cut short by a bus error
    pub failed_reports: u32,
    /// Readings discarded by the calibration
    pub rejected: u32,
    /// Timer ticks skipped because a conversion was in flight
    pub skipped_ticks: u32,
}

/// Timer-driven temperature sampling pipeline
pub struct TemperaturePipeline<S> {
    sensor: S,
    state: PipelineState,
    buffer: SampleBuffer,
    stats: PipelineStats,
}

impl<S: TemperatureSensor> TemperaturePipeline<S> {
    pub fn new(sensor: S) -> Self {
        Self {
            sensor,
            state: PipelineState::Idle,
            buffer: SampleBuffer::new(),
            stats: PipelineStats::default(),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// Handle a timer tick
    ///
    /// Starts a conversion when idle. Returns `false` if a conversion was
    /// already in flight and the tick was skipped.
    pub fn on_timer_tick<A: AdcTrigger + ?Sized>(&mut self, adc: &mut A) -> bool {
        if self.state != PipelineState::Idle {
            self.stats.skipped_ticks = self.stats.skipped_ticks.saturating_add(1);
            debug!("tick skipped, pipeline {}", self.state);
            return false;
        }
        self.state = PipelineState::Sampling;
        adc.start_conversion();
        true
    }

    /// Handle a finished conversion
    ///
    /// Converts and buffers the reading; when the window is full, averages
    /// it and sends the report to the display node one byte per
    /// transaction.
    pub fn on_conversion_complete<T: Transport + ?Sized>(
        &mut self,
        raw: u16,
        transport: &mut T,
    ) -> Completion {
        if self.state != PipelineState::Sampling {
            warn!("conversion complete with no sample in flight");
            return Completion::Spurious;
        }

        let celsius = match self.convert(raw) {
            Ok(celsius) => celsius,
            Err(e) => {
                warn!("reading {} rejected: {}", raw, e);
                self.stats.rejected = self.stats.rejected.saturating_add(1);
                self.state = PipelineState::Idle;
                return Completion::Rejected(e);
            }
        };

        let count = match self.buffer.push(celsius) {
            Ok(count) => count,
            // Full windows are always drained below, so this cannot persist
            Err(_) => {
                self.buffer.clear();
                0
            }
        };
        trace!("sample {}: {} C", count, celsius);

        if !self.buffer.is_full() {
            self.state = PipelineState::Idle;
            return Completion::Buffered { count };
        }

        self.state = PipelineState::Averaging;
        let mean = self.buffer.take_mean().unwrap_or_default();
        let report = TemperatureReport::from_celsius(mean);
        let result = transport.send_all(report.as_bytes(), Destination::Display);
        self.state = PipelineState::Idle;

        match result {
            Ok(()) => {
                debug!("reported {}", report.as_str());
                self.stats.reports = self.stats.reports.saturating_add(1);
                Completion::Reported(report)
            }
            Err(error) => {
                warn!("report aborted after {} bytes: {}", error.sent, error.error);
                self.stats.failed_reports = self.stats.failed_reports.saturating_add(1);
                if error.sent > 0 {
                    // The display has an open text run; terminate it
                    if let Err(e) = transport.send(RESET, Destination::Display) {
                        warn!("terminator after aborted report failed: {}", e);
                    }
                }
                Completion::ReportFailed { report, error }
            }
        }
    }

    /// Handle a conversion the ADC could not complete
    ///
    /// Nothing is buffered and the pipeline returns to idle so the next
    /// tick can start a fresh conversion.
    pub fn on_conversion_failed(&mut self) -> Completion {
        if self.state != PipelineState::Sampling {
            return Completion::Spurious;
        }
        warn!("conversion failed");
        self.stats.rejected = self.stats.rejected.saturating_add(1);
        self.state = PipelineState::Idle;
        Completion::Rejected(SensorError::ConversionError)
    }

    fn convert(&self, raw: u16) -> Result<f32, SensorError> {
        if raw > ADC_MAX {
            return Err(SensorError::OutOfRange);
        }
        let celsius = self.sensor.to_celsius(raw)?;
        if !celsius.is_finite() {
            return Err(SensorError::ConversionError);
        }
        Ok(celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingAdc, RecordingTransport, TenthsSensor};
    use crate::traits::BusError;

    fn sample<T: Transport>(
        pipeline: &mut TemperaturePipeline<TenthsSensor>,
        adc: &mut CountingAdc,
        raw: u16,
        bus: &mut T,
    ) -> Completion {
        assert!(pipeline.on_timer_tick(adc));
        pipeline.on_conversion_complete(raw, bus)
    }

    #[test]
    fn test_tick_starts_conversion() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        assert!(pipeline.on_timer_tick(&mut adc));
        assert_eq!(pipeline.state(), PipelineState::Sampling);
        assert_eq!(adc.started, 1);
    }

    #[test]
    fn test_tick_while_sampling_is_skipped() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        pipeline.on_timer_tick(&mut adc);
        assert!(!pipeline.on_timer_tick(&mut adc));
        assert_eq!(adc.started, 1);
        assert_eq!(pipeline.stats().skipped_ticks, 1);
    }

    #[test]
    fn test_report_every_third_sample() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        let mut bus = RecordingTransport::new();

        assert_eq!(
            sample(&mut pipeline, &mut adc, 230, &mut bus),
            Completion::Buffered { count: 1 }
        );
        assert_eq!(
            sample(&mut pipeline, &mut adc, 235, &mut bus),
            Completion::Buffered { count: 2 }
        );
        assert!(bus.messages().is_empty());

        let completion = sample(&mut pipeline, &mut adc, 240, &mut bus);
        let Completion::Reported(report) = completion else {
            panic!("expected a report, got {:?}", completion);
        };
        assert_eq!(report.as_str(), "Temp: 23.5C");
        assert_eq!(
            bus.bytes_to(Destination::Display).as_slice(),
            b"Temp: 23.5C\0"
        );
        assert!(bus.bytes_to(Destination::Indicator).is_empty());
        assert_eq!(pipeline.buffered(), 0);
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    #[test]
    fn test_one_report_per_window() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        let mut bus = RecordingTransport::new();

        let mut reports = 0;
        for i in 0..30 {
            if let Completion::Reported(_) = sample(&mut pipeline, &mut adc, 200 + i, &mut bus) {
                reports += 1;
            }
            assert!(pipeline.buffered() < 3);
        }
        assert_eq!(reports, 10);
        assert_eq!(pipeline.stats().reports, 10);
    }

    #[test]
    fn test_out_of_range_not_buffered() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        let mut bus = RecordingTransport::new();

        sample(&mut pipeline, &mut adc, 200, &mut bus);
        assert_eq!(
            sample(&mut pipeline, &mut adc, 4095, &mut bus),
            Completion::Rejected(SensorError::OutOfRange)
        );
        assert_eq!(
            sample(&mut pipeline, &mut adc, 0x1000, &mut bus),
            Completion::Rejected(SensorError::OutOfRange)
        );
        assert_eq!(pipeline.buffered(), 1);
        assert_eq!(pipeline.state(), PipelineState::Idle);
        assert_eq!(pipeline.stats().rejected, 2);
    }

    #[test]
    fn test_failed_conversion_returns_to_idle() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        pipeline.on_timer_tick(&mut adc);
        assert_eq!(
            pipeline.on_conversion_failed(),
            Completion::Rejected(SensorError::ConversionError)
        );
        assert_eq!(pipeline.state(), PipelineState::Idle);
        assert!(pipeline.on_timer_tick(&mut adc));
        assert_eq!(pipeline.on_conversion_failed(), Completion::Rejected(SensorError::ConversionError));
        assert_eq!(pipeline.on_conversion_failed(), Completion::Spurious);
    }

    #[test]
    fn test_spurious_completion() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut bus = RecordingTransport::new();
        assert_eq!(
            pipeline.on_conversion_complete(200, &mut bus),
            Completion::Spurious
        );
        assert_eq!(pipeline.buffered(), 0);
    }

    #[test]
    fn test_failed_send_aborts_report() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        let mut bus = RecordingTransport::new();

        sample(&mut pipeline, &mut adc, 200, &mut bus);
        sample(&mut pipeline, &mut adc, 200, &mut bus);
        bus.fail_after(4, BusError::Nack);
        let completion = sample(&mut pipeline, &mut adc, 200, &mut bus);
        assert!(matches!(
            completion,
            Completion::ReportFailed {
                error: SendError {
                    sent: 4,
                    error: BusError::Nack
                },
                ..
            }
        ));
        assert_eq!(bus.bytes_to(Destination::Display).as_slice(), b"Temp");
        assert_eq!(pipeline.stats().failed_reports, 1);
        // Four delivered, one failed, one failed terminator
        assert_eq!(bus.attempts(), 6);

        // Next window is unaffected
        bus.heal();
        bus.clear();
        sample(&mut pipeline, &mut adc, 210, &mut bus);
        sample(&mut pipeline, &mut adc, 210, &mut bus);
        let completion = sample(&mut pipeline, &mut adc, 210, &mut bus);
        assert!(matches!(completion, Completion::Reported(_)));
        assert_eq!(
            bus.bytes_to(Destination::Display).as_slice(),
            b"Temp: 21.0C\0"
        );
    }

    #[test]
    fn test_aborted_report_is_terminated() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        let mut bus = RecordingTransport::new();

        sample(&mut pipeline, &mut adc, 235, &mut bus);
        sample(&mut pipeline, &mut adc, 235, &mut bus);
        bus.fail_once_after(4, BusError::Timeout);
        let completion = sample(&mut pipeline, &mut adc, 235, &mut bus);
        assert!(matches!(completion, Completion::ReportFailed { .. }));
        assert_eq!(bus.bytes_to(Destination::Display).as_slice(), b"Temp\0");
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    #[test]
    fn test_failure_on_first_byte_sends_no_terminator() {
        let mut pipeline = TemperaturePipeline::new(TenthsSensor);
        let mut adc = CountingAdc::new();
        let mut bus = RecordingTransport::new();

        sample(&mut pipeline, &mut adc, 235, &mut bus);
        sample(&mut pipeline, &mut adc, 235, &mut bus);
        bus.fail_once_after(0, BusError::Nack);
        sample(&mut pipeline, &mut adc, 235, &mut bus);
        assert!(bus.messages().is_empty());
        assert_eq!(bus.attempts(), 1);
    }
}
