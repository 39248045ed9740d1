//! RGB LED output task
//!
//! Owns the red/blue PWM slice and the green GPIO and applies each planned
//! level as the controller publishes it.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use crate::channels::LED_LEVELS;

/// PWM wrap value for the red/blue channels (matches the 12-bit ADC range)
pub const PWM_TOP: u16 = 4095;

/// LED output task
#[embassy_executor::task]
pub async fn led_task(mut pwm: Pwm<'static>, mut config: PwmConfig, mut green: Output<'static>) {
    info!("LED task started");

    loop {
        let levels = LED_LEVELS.wait().await;

        config.compare_a = levels.red.min(PWM_TOP);
        config.compare_b = levels.blue.min(PWM_TOP);
        pwm.set_config(&config);

        if levels.green {
            green.set_high();
        } else {
            green.set_low();
        }
    }
}
