//! Joystick sampling task
//!
//! Reads both stick axes through the ADC at a fixed rate and publishes the
//! latest sample for the controller.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};

use kinesis_core::stick::StickSample;

use crate::channels::STICK_SAMPLE;

/// Sample period in milliseconds
pub const SAMPLE_PERIOD_MS: u64 = 10;

/// Joystick sampling task
#[embassy_executor::task]
pub async fn stick_task(
    mut adc: Adc<'static, Async>,
    mut x_channel: Channel<'static>,
    mut y_channel: Channel<'static>,
) {
    info!("Stick task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        ticker.next().await;

        let x = match adc.read(&mut x_channel).await {
            Ok(v) => v,
            Err(_) => {
                warn!("ADC read error on X axis");
                continue;
            }
        };
        let y = match adc.read(&mut y_channel).await {
            Ok(v) => v,
            Err(_) => {
                warn!("ADC read error on Y axis");
                continue;
            }
        };

        STICK_SAMPLE.signal(StickSample { x, y });
    }
}
