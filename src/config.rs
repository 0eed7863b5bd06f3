//! Application-wide constants and runtime configuration.
//!
//! All timing thresholds, encoder chip settings and LED colours live here
//! so they can be tuned in one place. The knob state machine and the I2C
//! adapter read them through [`KnobConfig`] and [`AdapterConfig`], whose
//! `Default` impls are built from the constants below.

use crate::color::{ModeColorTable, Rgb};

// Knob interaction

/// Brightness change per encoder detent in brightness mode (of 255).
pub const BRIGHTNESS_STEP: u8 = 16;

/// A press held longer than this counts as a long press (ms).
pub const LONG_PRESS_THRESHOLD_MS: u32 = 1000;

/// Idle time after which the knob falls back to brightness mode (ms).
pub const MODE_RESET_TIMEOUT_MS: u32 = 30_000;

/// Preset restored by a long press while the strip is off.
pub const OFF_RECOVERY_PRESET: u8 = 1;

/// LED colour shown in brightness mode.
pub const BRIGHTNESS_MODE_COLOR: Rgb = Rgb::from_u32(0x00_00FF);

/// LED colour shown in effect mode.
pub const EFFECT_MODE_COLOR: Rgb = Rgb::from_u32(0xFF_0000);

/// Polling period of the knob task (ms).
pub const KNOB_TICK_MS: u64 = 5;

// Lighting host

/// Number of effects the lighting engine exposes.
pub const EFFECT_COUNT: u8 = 118;

/// Maximum number of presets held by the lighting host.
pub const MAX_PRESETS: usize = 8;

/// Brightness the lighting host starts with.
pub const DEFAULT_BRIGHTNESS: u8 = 128;

// I2C encoder chip

/// I2C address of the encoder board (set by the A0..A6 solder jumpers).
pub const ENCODER_I2C_ADDR: u8 = 0x00;

/// Counter lower bound programmed into the chip.
pub const ENCODER_COUNTER_MIN: i32 = 0;

/// Counter upper bound programmed into the chip.
pub const ENCODER_COUNTER_MAX: i32 = 255;

/// Counter increment per detent.
pub const ENCODER_COUNTER_STEP: i32 = 1;

/// Anti-bounce period written to the chip (ms).
pub const ENCODER_DEBOUNCE_MS: u8 = 5;

/// RGB fade step written to the chip (ms per step, 0 disables fading).
pub const ENCODER_FADE_MS: u8 = 1;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder INT    → P0.11  (active-low, pull-up)
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Whether a long press keeps re-firing while the button stays held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LongPressRepeat {
    /// Fire once per physical press.
    Once,
    /// Re-arm after every threshold period while held, so holding the
    /// button for two thresholds cycles the mode twice.
    EveryThreshold,
}

/// Runtime knobs of the interaction state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KnobConfig {
    pub brightness_step: u8,
    pub long_press_ms: u32,
    pub inactivity_timeout_ms: u32,
    pub off_recovery_preset: u8,
    pub long_press_repeat: LongPressRepeat,
    pub colors: ModeColorTable,
}

impl KnobConfig {
    /// Configuration matching the compile-time defaults.
    pub const fn new() -> Self {
        Self {
            brightness_step: BRIGHTNESS_STEP,
            long_press_ms: LONG_PRESS_THRESHOLD_MS,
            inactivity_timeout_ms: MODE_RESET_TIMEOUT_MS,
            off_recovery_preset: OFF_RECOVERY_PRESET,
            long_press_repeat: LongPressRepeat::EveryThreshold,
            colors: ModeColorTable::new(BRIGHTNESS_MODE_COLOR, EFFECT_MODE_COLOR),
        }
    }

    pub const fn with_brightness_step(mut self, step: u8) -> Self {
        self.brightness_step = step;
        self
    }

    pub const fn with_long_press_ms(mut self, ms: u32) -> Self {
        self.long_press_ms = ms;
        self
    }

    pub const fn with_inactivity_timeout_ms(mut self, ms: u32) -> Self {
        self.inactivity_timeout_ms = ms;
        self
    }

    pub const fn with_off_recovery_preset(mut self, preset: u8) -> Self {
        self.off_recovery_preset = preset;
        self
    }

    pub const fn with_long_press_repeat(mut self, repeat: LongPressRepeat) -> Self {
        self.long_press_repeat = repeat;
        self
    }

    pub const fn with_colors(mut self, colors: ModeColorTable) -> Self {
        self.colors = colors;
        self
    }
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotation direction reported as "increment" by the chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clockwise rotation increments the counter.
    Right,
    /// Counter-clockwise rotation increments the counter.
    Left,
}

/// Bring-up parameters of the I2C encoder chip.
///
/// Only the adapter consumes these; the knob state machine never sees
/// register-level settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdapterConfig {
    pub address: u8,
    pub polarity: Polarity,
    pub pull_up: bool,
    pub wrap: bool,
    pub counter_min: i32,
    pub counter_max: i32,
    pub counter_step: i32,
    pub debounce_ms: u8,
    pub fade_ms: u8,
    /// Bitmask of `registers::status` sources that raise the INT line.
    pub interrupt_sources: u8,
}

impl AdapterConfig {
    pub const fn new() -> Self {
        use crate::registers::status;

        Self {
            address: ENCODER_I2C_ADDR,
            polarity: Polarity::Right,
            pull_up: true,
            wrap: true,
            counter_min: ENCODER_COUNTER_MIN,
            counter_max: ENCODER_COUNTER_MAX,
            counter_step: ENCODER_COUNTER_STEP,
            debounce_ms: ENCODER_DEBOUNCE_MS,
            fade_ms: ENCODER_FADE_MS,
            interrupt_sources: status::RINC | status::RDEC | status::PUSHP | status::PUSHR,
        }
    }

    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Value of the general configuration register for these settings.
    ///
    /// Always selects integer counter mode, x1 resolution and the RGB
    /// encoder variant.
    pub const fn gconf(&self) -> u8 {
        use crate::registers::gconf;

        let mut bits = gconf::RGB_ENCODER;
        if self.wrap {
            bits |= gconf::WRAP_ENABLE;
        }
        if let Polarity::Left = self.polarity {
            bits |= gconf::DIRE_LEFT;
        }
        if !self.pull_up {
            bits |= gconf::IPUP_DISABLE;
        }
        bits
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::new()
    }
}
