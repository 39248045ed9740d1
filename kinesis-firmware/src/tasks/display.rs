//! Display rendering task
//!
//! Renders the latest scene into the frame buffer and flushes it over I2C.
//! The latest-wins signal coalesces frames whenever the bus transfer is
//! slower than the sample rate.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;

use crate::channels::SCENE;
use crate::ssd1306::Ssd1306;

/// Display update task
#[embassy_executor::task]
pub async fn display_task(mut display: Ssd1306<I2c<'static, I2C1, Async>>) {
    info!("Display task started");

    loop {
        let scene = SCENE.wait().await;

        scene.render(display.frame_mut());
        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}
