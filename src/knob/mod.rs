//! Knob interaction state machine.
//!
//! [`KnobController`] turns raw encoder events into lighting actions:
//!
//! - **Turn** adjusts brightness (brightness mode) or steps through effects
//!   (effect mode).
//! - **Short press** toggles the light and returns to brightness mode.
//! - **Long press** cycles the mode, or restores a preset when the light is
//!   off and the knob is in brightness mode.
//! - **Inactivity** returns the knob to brightness mode.
//!
//! The LED on the knob always shows the colour of the current mode.
//! [`KnobController::tick`] must be called periodically with a monotonic
//! millisecond timestamp; it never blocks and never fails.

pub mod adjust;
mod button;
mod inactivity;
mod mode;


pub use button::ButtonState;
pub use inactivity::{mode_reset_due, InactivityTimer};
pub use mode::OperatingMode;

use crate::config::{KnobConfig, LongPressRepeat};
use crate::event::{Direction, DriverAdapter};
use crate::host::{LightingHost, NotifyReason};

/// Owns mode, button timing and inactivity state of one encoder.
#[derive(Clone, Debug)]
pub struct KnobController {
    config: KnobConfig,
    mode: OperatingMode,
    button: ButtonState,
    inactivity: InactivityTimer,
}

impl KnobController {
    /// Create a controller in brightness mode with the button released.
    ///
    /// `now_ms` seeds the inactivity timer.
    pub const fn new(config: KnobConfig, now_ms: u32) -> Self {
        Self {
            config,
            mode: OperatingMode::Brightness,
            button: ButtonState::new(),
            inactivity: InactivityTimer::new(now_ms),
        }
    }

    /// Show the initial mode colour. Call once after the adapter is up.
    pub fn begin<A: DriverAdapter>(&mut self, adapter: &mut A) {
        adapter.set_indicator_color(self.config.colors.color_for(self.mode));
    }

    pub const fn mode(&self) -> OperatingMode {
        self.mode
    }

    pub const fn button(&self) -> &ButtonState {
        &self.button
    }

    pub const fn last_interaction_ms(&self) -> u32 {
        self.inactivity.last_interaction_ms()
    }

    pub const fn config(&self) -> &KnobConfig {
        &self.config
    }

    /// Run one polling cycle.
    pub fn tick<A, H>(&mut self, now_ms: u32, adapter: &mut A, host: &mut H)
    where
        A: DriverAdapter,
        H: LightingHost,
    {
        if let Some(event) = adapter.poll_pending_event() {
            if let Some(direction) = event.rotation {
                self.on_rotate(direction, now_ms, host);
            }
            if event.button_push {
                self.on_push(now_ms);
            }
            if event.button_release {
                self.on_release(now_ms, adapter, host);
            }
        }

        self.button.track(now_ms);
        let rearm = self.config.long_press_repeat == LongPressRepeat::EveryThreshold;
        if self.button.long_press_due(self.config.long_press_ms, rearm) {
            self.on_long_press(now_ms, adapter, host);
        }

        let idle_ms = self.inactivity.idle_ms(now_ms);
        if mode_reset_due(
            self.mode == OperatingMode::Brightness,
            idle_ms,
            self.config.inactivity_timeout_ms,
        ) {
            #[cfg(feature = "defmt")]
            defmt::info!("Knob: idle for {} ms, back to brightness", idle_ms);
            self.set_mode(OperatingMode::Brightness, adapter);
        }
    }

    fn on_rotate<H: LightingHost>(&mut self, direction: Direction, now_ms: u32, host: &mut H) {
        self.mode.apply(direction, host, self.config.brightness_step);
        self.inactivity.touch(now_ms);
    }

    fn on_push(&mut self, now_ms: u32) {
        self.button.press(now_ms);
        self.inactivity.touch(now_ms);
    }

    fn on_release<A, H>(&mut self, now_ms: u32, adapter: &mut A, host: &mut H)
    where
        A: DriverAdapter,
        H: LightingHost,
    {
        if self.button.release() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Knob: short press");
            host.toggle_on_off();
            host.notify_changed(NotifyReason::Button);
            self.set_mode(OperatingMode::Brightness, adapter);
        }
        self.inactivity.touch(now_ms);
    }

    fn on_long_press<A, H>(&mut self, now_ms: u32, adapter: &mut A, host: &mut H)
    where
        A: DriverAdapter,
        H: LightingHost,
    {
        if self.mode == OperatingMode::Brightness && host.brightness() == 0 {
            #[cfg(feature = "defmt")]
            defmt::info!(
                "Knob: long press while off, applying preset {}",
                self.config.off_recovery_preset
            );
            host.apply_preset(self.config.off_recovery_preset);
            host.notify_changed(NotifyReason::EffectChanged);
        } else {
            self.set_mode(self.mode.next(), adapter);
        }
        self.button.mark_long_press(now_ms);
    }

    /// Switch mode and repaint the LED, even if the mode is unchanged.
    fn set_mode<A: DriverAdapter>(&mut self, mode: OperatingMode, adapter: &mut A) {
        if mode != self.mode {
            #[cfg(feature = "defmt")]
            defmt::info!("Knob: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        adapter.set_indicator_color(self.config.colors.color_for(mode));
    }
}
