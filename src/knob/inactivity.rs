/// Decide whether the knob should fall back to its default mode.
pub fn mode_reset_due(in_default_mode: bool, idle_ms: u32, timeout_ms: u32) -> bool {
    !in_default_mode && idle_ms > timeout_ms
}

/// Time of the last rotation, press or release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InactivityTimer {
    last_interaction_ms: u32,
}

impl InactivityTimer {
    pub const fn new(now_ms: u32) -> Self {
        Self {
            last_interaction_ms: now_ms,
        }
    }

    pub fn touch(&mut self, now_ms: u32) {
        self.last_interaction_ms = now_ms;
    }

    pub const fn last_interaction_ms(&self) -> u32 {
        self.last_interaction_ms
    }

    pub fn idle_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_interaction_ms)
    }
}
