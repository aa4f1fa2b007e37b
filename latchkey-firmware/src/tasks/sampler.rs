//! Temperature sampler task
//!
//! Every sampler period a conversion is started on the RTD channel. The
//! task then awaits the ADC completion interrupt and hands the reading to
//! the pipeline, which reports each full window to the display node.

use defmt::*;
use embassy_time::{Duration, Ticker};

use latchkey_core::config::SamplerConfig;
use latchkey_core::sampling::{Completion, TemperaturePipeline};
use latchkey_drivers::sensor::RtdDivider;
use latchkey_hal_rp2040::RpAdc;

use crate::bus::SharedTransport;
use crate::channels::{LAST_REPORT, SAMPLER_STATS};

#[embassy_executor::task]
pub async fn sampler_task(mut adc: RpAdc<'static>, config: SamplerConfig) {
    info!(
        "Sampler task started: period {} ms, reference {} ohms",
        config.period_ms, config.reference_ohms
    );

    let mut pipeline = TemperaturePipeline::new(RtdDivider::from_config(&config));
    let mut transport = SharedTransport;
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.period_ms)));

    loop {
        ticker.next().await;

        if !pipeline.on_timer_tick(&mut adc) {
            continue;
        }

        let completion = match adc.complete().await {
            Some(Ok(raw)) => pipeline.on_conversion_complete(raw, &mut transport),
            Some(Err(e)) => {
                warn!("ADC error: {}", Debug2Format(&e));
                pipeline.on_conversion_failed()
            }
            None => continue,
        };

        if let Completion::Reported(report) = completion {
            LAST_REPORT.signal(report);
        }
        SAMPLER_STATS.signal(pipeline.stats());
    }
}
