//! RGB LED output planning
//!
//! Decides what the three LEDs should show from the latest stick sample and
//! the control state. The firmware task applies the plan to the PWM slice
//! and the green GPIO.

use crate::state::ControlState;
use crate::stick::{led_duty, StickSample, ADC_MAX};

/// Planned output levels for the RGB LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedLevels {
    /// Red PWM compare value, driven by the X axis
    pub red: u16,
    /// Blue PWM compare value, driven by the Y axis
    pub blue: u16,
    /// Green LED on/off
    pub green: bool,
}

impl LedLevels {
    /// Everything dark
    pub const OFF: Self = Self {
        red: 0,
        blue: 0,
        green: false,
    };

    /// Plan output levels from the latest sample and control state
    ///
    /// The button-A override forces all three LEDs fully on; otherwise red
    /// and blue follow stick deflection and green follows its latch.
    pub fn plan(sample: StickSample, state: &ControlState) -> Self {
        if state.all_leds_on {
            return Self {
                red: ADC_MAX,
                blue: ADC_MAX,
                green: true,
            };
        }
        Self {
            red: led_duty(sample.x),
            blue: led_duty(sample.y),
            green: state.green_led,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    #[test]
    fn centered_stick_is_dark() {
        let state = ControlState::new();
        let levels = LedLevels::plan(StickSample::centered(), &state);
        assert_eq!(levels, LedLevels::OFF);
    }

    #[test]
    fn axes_drive_their_own_channel() {
        let state = ControlState::new();
        let levels = LedLevels::plan(StickSample { x: 0, y: 2048 }, &state);
        assert_eq!(levels.red, ADC_MAX);
        assert_eq!(levels.blue, 0);

        let levels = LedLevels::plan(StickSample { x: 2048, y: 4095 }, &state);
        assert_eq!(levels.red, 0);
        assert_eq!(levels.blue, 4094);
    }

    #[test]
    fn green_follows_latch() {
        let mut state = ControlState::new();
        state.handle(InputEvent::StickPress);
        let levels = LedLevels::plan(StickSample::centered(), &state);
        assert!(levels.green);
        assert_eq!(levels.red, 0);
    }

    #[test]
    fn override_forces_everything_on() {
        let mut state = ControlState::new();
        state.handle(InputEvent::ButtonA);
        let levels = LedLevels::plan(StickSample::centered(), &state);
        assert_eq!(levels.red, ADC_MAX);
        assert_eq!(levels.blue, ADC_MAX);
        assert!(levels.green);

        // Stick position is irrelevant while the override holds
        let levels = LedLevels::plan(StickSample { x: 0, y: 0 }, &state);
        assert_eq!(levels.red, ADC_MAX);
        assert_eq!(levels.blue, ADC_MAX);
    }
}
