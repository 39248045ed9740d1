//! Board-agnostic core logic for the kinesis joystick firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Button input events and debouncing
//! - Joystick axis to LED duty mapping
//! - Control state folded from button presses
//! - Display scene model and frame buffer
//!
//! Everything here is pure and runs on the host for testing; the firmware
//! crate wires it to the RP2040 peripherals.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod input;
pub mod led;
pub mod scene;
pub mod state;
pub mod stick;
