//! rgb-knob firmware entry point.
//!
//! Brings up TWIM0 and the encoder INT line, programs the encoder chip and
//! spawns two tasks:
//!
//! - `knob_task`  - polls the encoder and drives the lighting state
//! - `sync_task`  - picks up change notifications for downstream consumers

#![no_std]
#![no_main]

use defmt::{error, info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Delay, Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rgb_knob::config::{AdapterConfig, KnobConfig, DEFAULT_BRIGHTNESS, KNOB_TICK_MS, OFF_RECOVERY_PRESET};
use rgb_knob::drivers::I2cEncoder;
use rgb_knob::host::LightingHost;
use rgb_knob::knob::KnobController;
use rgb_knob::lighting::{LightState, Preset};
use rgb_knob::task::{knob_loop, now_ms};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

type Encoder = I2cEncoder<Twim<'static, peripherals::TWISPI0>, Input<'static>>;

/// Lighting state shared between the knob and sync tasks.
static LIGHT: StaticCell<Mutex<CriticalSectionRawMutex, LightState>> = StaticCell::new();

/// How often pending change notifications are drained.
const SYNC_PERIOD_MS: u64 = 100;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("rgb-knob v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_nrf::init(Default::default());

    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim_config);

    // Encoder INT: active-low, open drain on the board.
    let int_pin = Input::new(p.P0_11, Pull::Up);

    let mut encoder = I2cEncoder::new(i2c, int_pin, AdapterConfig::default());
    if let Err(e) = encoder.begin(&mut Delay) {
        // Keep running: the knob loop logs every failed poll, and a chip that
        // comes up late still answers status reads.
        error!("Encoder bring-up failed: {}", e);
    }

    let mut light = LightState::new();
    if light
        .save_preset(Preset::new(OFF_RECOVERY_PRESET, DEFAULT_BRIGHTNESS, 0))
        .is_err()
    {
        error!("Preset table full");
    }
    let light = LIGHT.init(Mutex::new(light));

    let knob = KnobController::new(KnobConfig::default(), now_ms());

    unwrap!(spawner.spawn(knob_task(knob, encoder, light)));
    unwrap!(spawner.spawn(sync_task(light)));
    info!("Tasks spawned");
}

#[embassy_executor::task]
async fn knob_task(
    knob: KnobController,
    encoder: Encoder,
    light: &'static Mutex<CriticalSectionRawMutex, LightState>,
) {
    knob_loop(knob, encoder, light, Duration::from_millis(KNOB_TICK_MS)).await
}

#[embassy_executor::task]
async fn sync_task(light: &'static Mutex<CriticalSectionRawMutex, LightState>) {
    loop {
        Timer::after(Duration::from_millis(SYNC_PERIOD_MS)).await;

        let mut light = light.lock().await;
        while let Some(reason) = light.take_change() {
            info!(
                "Light changed ({}): bri={} fx={}",
                reason,
                light.brightness(),
                light.effect_index()
            );
        }
    }
}
