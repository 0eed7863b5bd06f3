//! The lighting engine as seen from the knob.
//!
//! The state machine does not own brightness, effect or presets; it is handed
//! a [`LightingHost`] on every tick and calls into it. [`crate::lighting`]
//! provides a self-contained implementation.

/// Why the host state changed, for downstream synchronisation
/// (persistence, network sync, UI refresh).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotifyReason {
    /// Change caused by a direct user control (brightness turn, on/off).
    Button,
    /// The active effect changed, directly or through a preset.
    EffectChanged,
}

/// Actions the knob can request from the lighting engine.
pub trait LightingHost {
    fn brightness(&self) -> u8;
    fn set_brightness(&mut self, value: u8);

    fn effect_index(&self) -> u8;
    /// Number of selectable effects. Zero disables effect stepping.
    fn effect_count(&self) -> u8;
    fn set_effect_index(&mut self, value: u8);

    fn toggle_on_off(&mut self);
    fn apply_preset(&mut self, id: u8);

    fn notify_changed(&mut self, reason: NotifyReason);
}
