//! Encoder events and the driver-adapter contract.
//!
//! The knob state machine never talks to hardware directly. Once per tick it
//! asks a [`DriverAdapter`] for whatever happened since the last poll and
//! pushes colour changes back through the same adapter. The I2C chip adapter
//! (`drivers::i2c_encoder`) implements this on target; tests use a scripted
//! fake.

use crate::color::Rgb;
use crate::registers::status;

/// Rotation direction of one detent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// `+1` for increment, `-1` for decrement.
    pub const fn sign(self) -> i16 {
        match self {
            Direction::Increment => 1,
            Direction::Decrement => -1,
        }
    }
}

/// Everything the adapter observed since the previous poll.
///
/// Several flags may be set at once; the state machine handles rotation,
/// then push, then release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderEvent {
    pub rotation: Option<Direction>,
    pub button_push: bool,
    pub button_release: bool,
}

impl EncoderEvent {
    pub const fn rotated(direction: Direction) -> Self {
        Self {
            rotation: Some(direction),
            button_push: false,
            button_release: false,
        }
    }

    pub const fn pushed() -> Self {
        Self {
            rotation: None,
            button_push: true,
            button_release: false,
        }
    }

    pub const fn released() -> Self {
        Self {
            rotation: None,
            button_push: false,
            button_release: true,
        }
    }

    /// Decode the chip's status register.
    ///
    /// Returns `None` when no bit the knob cares about is set (an empty read,
    /// or only counter-limit / double-push flags). If both rotation bits are
    /// set the increment wins.
    pub const fn from_status(bits: u8) -> Option<Self> {
        let rotation = if bits & status::RINC != 0 {
            Some(Direction::Increment)
        } else if bits & status::RDEC != 0 {
            Some(Direction::Decrement)
        } else {
            None
        };
        let event = Self {
            rotation,
            button_push: bits & status::PUSHP != 0,
            button_release: bits & status::PUSHR != 0,
        };
        if event.is_empty() {
            None
        } else {
            Some(event)
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.rotation.is_none() && !self.button_push && !self.button_release
    }
}

/// Hardware side of the knob: event source and LED sink.
pub trait DriverAdapter {
    /// Non-blocking. Returns the pending event flags, or `None` if the
    /// interrupt line is idle or nothing relevant happened.
    fn poll_pending_event(&mut self) -> Option<EncoderEvent>;

    /// Fire-and-forget LED colour write.
    fn set_indicator_color(&mut self, color: Rgb);
}
