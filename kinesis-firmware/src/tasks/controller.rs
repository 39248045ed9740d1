//! Controller task
//!
//! Folds button events into the control state, combines each stick sample
//! with that state and publishes LED levels and display scenes.

use defmt::*;
use embassy_futures::select::{select, Either};

use kinesis_core::led::LedLevels;
use kinesis_core::scene::Scene;
use kinesis_core::state::ControlState;
use kinesis_core::stick::StickSample;

use crate::channels::{INPUT_CHANNEL, LED_LEVELS, SCENE, STICK_SAMPLE};

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    let mut state = ControlState::new();
    let mut sample = StickSample::centered();

    // Boot frame: centered square, LEDs off
    LED_LEVELS.signal(LedLevels::plan(sample, &state));
    SCENE.signal(Scene::centered(state.border));

    loop {
        match select(INPUT_CHANNEL.receive(), STICK_SAMPLE.wait()).await {
            Either::First(event) => {
                state.handle(event);
                debug!("Input: {:?} -> {:?}", event, state);
            }
            Either::Second(s) => {
                sample = s;
            }
        }

        LED_LEVELS.signal(LedLevels::plan(sample, &state));
        SCENE.signal(Scene::from_sample(sample, state.border));
    }
}
