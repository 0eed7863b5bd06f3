//! In-memory lighting engine state driven by the knob.
//!
//! [`LightState`] is the [`LightingHost`] the firmware hands to the knob. It
//! keeps brightness, on/off memory, the active effect and a small preset
//! table, and queues each distinct change reason until another task drains
//! it with [`LightState::take_change`].

use crate::config::{DEFAULT_BRIGHTNESS, EFFECT_COUNT, MAX_PRESETS};
use crate::host::{LightingHost, NotifyReason};
use heapless::{Deque, Vec};

/// One slot per [`NotifyReason`] variant; repeats are merged.
const PENDING_REASONS: usize = 2;

/// A stored brightness/effect snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Preset {
    pub id: u8,
    pub brightness: u8,
    pub effect: u8,
}

impl Preset {
    pub const fn new(id: u8, brightness: u8, effect: u8) -> Self {
        Self {
            id,
            brightness,
            effect,
        }
    }
}

/// The preset table is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresetTableFull;

#[derive(Clone, Debug)]
pub struct LightState {
    brightness: u8,
    /// Brightness restored when toggled back on.
    last_brightness: u8,
    effect: u8,
    effect_count: u8,
    presets: Vec<Preset, MAX_PRESETS>,
    pending: Deque<NotifyReason, PENDING_REASONS>,
}

impl LightState {
    pub const fn new() -> Self {
        Self::with_effect_count(EFFECT_COUNT)
    }

    pub const fn with_effect_count(effect_count: u8) -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            last_brightness: DEFAULT_BRIGHTNESS,
            effect: 0,
            effect_count,
            presets: Vec::new(),
            pending: Deque::new(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.brightness > 0
    }

    /// Store or replace a preset by id.
    pub fn save_preset(&mut self, preset: Preset) -> Result<(), PresetTableFull> {
        if let Some(existing) = self.presets.iter_mut().find(|p| p.id == preset.id) {
            *existing = preset;
            return Ok(());
        }
        self.presets.push(preset).map_err(|_| PresetTableFull)
    }

    pub fn preset(&self, id: u8) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Pop the oldest undrained change reason.
    ///
    /// Each reason is queued at most once between drains, so callers that
    /// loop until `None` see every kind of change that happened.
    pub fn take_change(&mut self) -> Option<NotifyReason> {
        self.pending.pop_front()
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

impl LightingHost for LightState {
    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
        if value > 0 {
            self.last_brightness = value;
        }
    }

    fn effect_index(&self) -> u8 {
        self.effect
    }

    fn effect_count(&self) -> u8 {
        self.effect_count
    }

    fn set_effect_index(&mut self, value: u8) {
        if value < self.effect_count {
            self.effect = value;
        }
    }

    fn toggle_on_off(&mut self) {
        if self.brightness == 0 {
            self.brightness = self.last_brightness.max(1);
        } else {
            self.last_brightness = self.brightness;
            self.brightness = 0;
        }
    }

    fn apply_preset(&mut self, id: u8) {
        match self.preset(id).copied() {
            Some(preset) => {
                self.set_brightness(preset.brightness);
                self.set_effect_index(preset.effect);
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Lighting: preset {} not found", id);
            }
        }
    }

    fn notify_changed(&mut self, reason: NotifyReason) {
        if self.pending.iter().any(|r| *r == reason) {
            return;
        }
        if self.pending.push_back(reason).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Lighting: change queue full, dropping {}", reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_off_then_on_restores_brightness() {
        let mut light = LightState::new();
        light.set_brightness(90);
        light.toggle_on_off();
        assert_eq!(light.brightness(), 0);
        assert!(!light.is_on());
        light.toggle_on_off();
        assert_eq!(light.brightness(), 90);
    }

    #[test]
    fn toggle_on_after_dimming_to_zero_uses_last_nonzero() {
        let mut light = LightState::new();
        light.set_brightness(32);
        light.set_brightness(0);
        light.toggle_on_off();
        assert_eq!(light.brightness(), 32);
    }

    #[test]
    fn effect_index_out_of_range_is_ignored() {
        let mut light = LightState::with_effect_count(4);
        light.set_effect_index(3);
        light.set_effect_index(4);
        assert_eq!(light.effect_index(), 3);
    }

    #[test]
    fn apply_known_preset() {
        let mut light = LightState::with_effect_count(10);
        light.save_preset(Preset::new(1, 200, 7)).unwrap();
        light.set_brightness(0);
        light.apply_preset(1);
        assert_eq!(light.brightness(), 200);
        assert_eq!(light.effect_index(), 7);
    }

    #[test]
    fn apply_unknown_preset_changes_nothing() {
        let mut light = LightState::new();
        light.set_brightness(0);
        light.apply_preset(9);
        assert_eq!(light.brightness(), 0);
        assert_eq!(light.effect_index(), 0);
    }

    #[test]
    fn save_preset_replaces_same_id() {
        let mut light = LightState::new();
        light.save_preset(Preset::new(2, 10, 1)).unwrap();
        light.save_preset(Preset::new(2, 20, 2)).unwrap();
        assert_eq!(light.preset(2), Some(&Preset::new(2, 20, 2)));
    }

    #[test]
    fn preset_table_capacity() {
        let mut light = LightState::new();
        for id in 0..MAX_PRESETS as u8 {
            light.save_preset(Preset::new(id, 1, 0)).unwrap();
        }
        assert_eq!(
            light.save_preset(Preset::new(MAX_PRESETS as u8, 1, 0)),
            Err(PresetTableFull)
        );
    }

    #[test]
    fn take_change_drains_each_reason_in_order() {
        let mut light = LightState::new();
        light.notify_changed(NotifyReason::Button);
        light.notify_changed(NotifyReason::EffectChanged);
        assert_eq!(light.take_change(), Some(NotifyReason::Button));
        assert_eq!(light.take_change(), Some(NotifyReason::EffectChanged));
        assert_eq!(light.take_change(), None);
    }

    #[test]
    fn repeated_reason_is_queued_once() {
        let mut light = LightState::new();
        light.notify_changed(NotifyReason::EffectChanged);
        light.notify_changed(NotifyReason::Button);
        light.notify_changed(NotifyReason::EffectChanged);
        light.notify_changed(NotifyReason::Button);
        assert_eq!(light.take_change(), Some(NotifyReason::EffectChanged));
        assert_eq!(light.take_change(), Some(NotifyReason::Button));
        assert_eq!(light.take_change(), None);

        light.notify_changed(NotifyReason::Button);
        assert_eq!(light.take_change(), Some(NotifyReason::Button));
    }
}
