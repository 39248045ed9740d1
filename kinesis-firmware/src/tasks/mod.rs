//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod controller;
pub mod display;
pub mod leds;
pub mod stick;

pub use buttons::button_task;
pub use controller::controller_task;
pub use display::display_task;
pub use leds::led_task;
pub use stick::stick_task;
