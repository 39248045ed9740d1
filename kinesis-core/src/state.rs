//! Control state folded from button events
//!
//! Two latched flags and the border style, all toggled by debounced button
//! presses. The green LED and the border style flip together on a stick
//! press; button A flips the all-LEDs override.

use crate::input::InputEvent;
use crate::scene::BorderStyle;

/// Latched output modes toggled by the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// Green LED latch, toggled by the stick button
    pub green_led: bool,
    /// Force all three LEDs fully on, toggled by button A
    pub all_leds_on: bool,
    /// Display border style, toggled together with the green LED
    pub border: BorderStyle,
}

impl ControlState {
    /// Boot state: LEDs off, single border
    pub const fn new() -> Self {
        Self {
            green_led: false,
            all_leds_on: false,
            border: BorderStyle::Single,
        }
    }

    /// Fold one debounced button event into the state
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::StickPress => {
                self.green_led = !self.green_led;
                self.border = self.border.toggled();
            }
            InputEvent::ButtonA => {
                self.all_leds_on = !self.all_leds_on;
            }
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_press_toggles_green_and_border_together() {
        let mut state = ControlState::new();
        state.handle(InputEvent::StickPress);
        assert!(state.green_led);
        assert_eq!(state.border, BorderStyle::Double);

        state.handle(InputEvent::StickPress);
        assert!(!state.green_led);
        assert_eq!(state.border, BorderStyle::Single);
    }

    #[test]
    fn button_a_toggles_override_only() {
        let mut state = ControlState::new();
        state.handle(InputEvent::ButtonA);
        assert!(state.all_leds_on);
        assert!(!state.green_led);
        assert_eq!(state.border, BorderStyle::Single);

        state.handle(InputEvent::ButtonA);
        assert!(!state.all_leds_on);
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = ControlState::new();
        state.handle(InputEvent::ButtonA);
        state.handle(InputEvent::StickPress);
        assert!(state.all_leds_on);
        assert!(state.green_led);

        state.handle(InputEvent::ButtonA);
        assert!(!state.all_leds_on);
        assert!(state.green_led);
    }
}
