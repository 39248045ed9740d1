//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use kinesis_core::input::InputEvent;
use kinesis_core::led::LedLevels;
use kinesis_core::scene::Scene;
use kinesis_core::stick::StickSample;

/// Channel capacity for debounced button events
const INPUT_CHANNEL_SIZE: usize = 8;

/// Debounced button events from the button tasks
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Latest joystick sample (updated by the stick task, latest-wins)
pub static STICK_SAMPLE: Signal<CriticalSectionRawMutex, StickSample> = Signal::new();

/// Planned LED levels (updated by the controller)
pub static LED_LEVELS: Signal<CriticalSectionRawMutex, LedLevels> = Signal::new();

/// Scene to render (updated by the controller; coalesces when flushing lags)
pub static SCENE: Signal<CriticalSectionRawMutex, Scene> = Signal::new();
