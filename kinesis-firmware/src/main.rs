//! Kinesis - Joystick playground firmware
//!
//! Main firmware binary for BitDogLab-style RP2040 boards: a two-axis
//! analog joystick on the ADC, an RGB LED on PWM/GPIO, and an SSD1306 OLED
//! on I2C showing a square that tracks the stick.
//!
//! From the Greek "kinesis" meaning "motion".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

use kinesis_core::input::InputEvent;

use crate::ssd1306::Ssd1306;
use crate::tasks::leds::PWM_TOP;

mod channels;
mod ssd1306;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
});

/// Program metadata for `picotool info`
#[link_section = ".bi_entries"]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"kinesis"),
    embassy_rp::binary_info::rp_program_description!(
        c"Joystick playground: stick motion to RGB LED and OLED square"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Kinesis firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup I2C1 for the SSD1306 (BitDogLab: SDA=GPIO14, SCL=GPIO15)
    let i2c_config = {
        let mut cfg = i2c::Config::default();
        cfg.frequency = 400_000;
        cfg
    };
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    let mut display = Ssd1306::new(i2c);
    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }

    // Setup ADC for the joystick (X=GPIO26/ADC0, Y=GPIO27/ADC1)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let x_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let y_channel = Channel::new_pin(p.PIN_27, Pull::None);

    // Setup PWM slice 6 for the red (GPIO12, output A) and blue (GPIO13,
    // output B) LEDs; the wrap value matches the 12-bit ADC range
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = PWM_TOP;
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config.clone());

    // Green LED is plain GPIO (GPIO11)
    let green = Output::new(p.PIN_11, Level::Low);

    // Buttons: joystick press (GPIO22), board button A (GPIO5)
    let stick_button = Input::new(p.PIN_22, Pull::Up);
    let button_a = Input::new(p.PIN_5, Pull::Up);

    // Spawn tasks
    spawner
        .spawn(tasks::stick_task(adc, x_channel, y_channel))
        .unwrap();
    spawner
        .spawn(tasks::button_task(stick_button, InputEvent::StickPress))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_a, InputEvent::ButtonA))
        .unwrap();
    spawner.spawn(tasks::controller_task()).unwrap();
    spawner.spawn(tasks::led_task(pwm, pwm_config, green)).unwrap();
    spawner.spawn(tasks::display_task(display)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
