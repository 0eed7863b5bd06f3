use super::adjust::{step_brightness, step_effect};
use crate::event::Direction;
use crate::host::{LightingHost, NotifyReason};

/// What a turn of the knob controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    #[default]
    Brightness,
    Effect,
}

impl OperatingMode {
    /// The mode a long press switches to.
    pub const fn next(self) -> Self {
        match self {
            OperatingMode::Brightness => OperatingMode::Effect,
            OperatingMode::Effect => OperatingMode::Brightness,
        }
    }

    /// Apply one detent of rotation to the host in this mode.
    pub fn apply<H: LightingHost>(self, direction: Direction, host: &mut H, brightness_step: u8) {
        match self {
            OperatingMode::Brightness => {
                let delta = direction.sign() * i16::from(brightness_step);
                host.set_brightness(step_brightness(host.brightness(), delta));
                host.notify_changed(NotifyReason::Button);
            }
            OperatingMode::Effect => {
                let count = host.effect_count();
                if count == 0 {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Knob: host reports no effects, ignoring turn");
                    return;
                }
                host.set_effect_index(step_effect(host.effect_index(), direction.sign(), count));
                host.notify_changed(NotifyReason::EffectChanged);
            }
        }
    }
}
