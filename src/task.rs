//! Knob polling loop (embedded only).
//!
//! Runs the state machine on a fixed ticker. The lighting state is shared
//! with other tasks through a mutex that is held only for the duration of
//! one tick; the adapter is owned by the loop.

use crate::event::DriverAdapter;
use crate::host::LightingHost;
use crate::knob::KnobController;
use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Instant, Ticker};

/// Millisecond timestamp for the state machine; wraps after ~49 days.
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Poll the encoder every `period` forever.
pub async fn knob_loop<A, H>(
    mut knob: KnobController,
    mut adapter: A,
    host: &'static Mutex<CriticalSectionRawMutex, H>,
    period: Duration,
) -> !
where
    A: DriverAdapter,
    H: LightingHost,
{
    knob.begin(&mut adapter);
    info!("Knob: polling every {} ms", period.as_millis());

    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        let mut host = host.lock().await;
        knob.tick(now_ms(), &mut adapter, &mut *host);
    }
}
