/// Timing state of the encoder's push button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    is_down: bool,
    press_start_ms: u32,
    press_duration_ms: u32,
    was_long_press: bool,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            is_down: false,
            press_start_ms: 0,
            press_duration_ms: 0,
            was_long_press: false,
        }
    }

    pub const fn is_down(&self) -> bool {
        self.is_down
    }

    /// Time held so far; zero while released.
    pub const fn press_duration_ms(&self) -> u32 {
        self.press_duration_ms
    }

    pub const fn was_long_press(&self) -> bool {
        self.was_long_press
    }

    pub fn press(&mut self, now_ms: u32) {
        self.is_down = true;
        self.press_start_ms = now_ms;
    }

    /// Record the release edge. Returns `true` if it completes a short press.
    pub fn release(&mut self) -> bool {
        let short = !self.was_long_press;
        self.is_down = false;
        self.was_long_press = false;
        self.press_duration_ms = 0;
        short
    }

    /// Refresh the held duration while the button is down.
    pub fn track(&mut self, now_ms: u32) {
        if self.is_down {
            self.press_duration_ms = now_ms.wrapping_sub(self.press_start_ms);
        }
    }

    /// Whether the current duration window crossed `threshold_ms`.
    ///
    /// With `rearm == false` only the first crossing of a press counts.
    pub fn long_press_due(&self, threshold_ms: u32, rearm: bool) -> bool {
        self.is_down
            && self.press_duration_ms > threshold_ms
            && (rearm || !self.was_long_press)
    }

    /// Mark the long press as handled and restart the duration window.
    pub fn mark_long_press(&mut self, now_ms: u32) {
        self.was_long_press = true;
        self.press_start_ms = now_ms;
        self.press_duration_ms = 0;
    }
}
