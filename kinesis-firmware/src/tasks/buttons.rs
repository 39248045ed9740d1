//! Button edge tasks
//!
//! One task instance per button. Waits for a falling edge, runs the edge
//! through the button's own debouncer and forwards the event to the
//! controller.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use kinesis_core::input::{Debouncer, InputEvent, DEBOUNCE_LOCKOUT_MS};

use crate::channels::INPUT_CHANNEL;

/// Button task (one instance per button)
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: Input<'static>, event: InputEvent) {
    info!("Button task started ({:?})", event);

    let mut debouncer = Debouncer::new(DEBOUNCE_LOCKOUT_MS);

    loop {
        pin.wait_for_falling_edge().await;

        if debouncer.accept(Instant::now().as_millis()) {
            debug!("Button: {:?}", event);
            INPUT_CHANNEL.send(event).await;
        }
    }
}
