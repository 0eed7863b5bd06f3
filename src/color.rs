//! 24-bit LED colours and the per-mode colour table.

use crate::knob::OperatingMode;

/// An RGB colour as written to the encoder's LED.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value; the top byte is ignored.
    pub const fn from_u32(code: u32) -> Self {
        Self {
            r: (code >> 16) as u8,
            g: (code >> 8) as u8,
            b: code as u8,
        }
    }

    /// Packed `0xRRGGBB` representation.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Register order used by the encoder chip (R, G, B).
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Fixed mapping from operating mode to feedback colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeColorTable {
    pub brightness: Rgb,
    pub effect: Rgb,
}

impl ModeColorTable {
    pub const fn new(brightness: Rgb, effect: Rgb) -> Self {
        Self { brightness, effect }
    }

    pub const fn color_for(&self, mode: OperatingMode) -> Rgb {
        match mode {
            OperatingMode::Brightness => self.brightness,
            OperatingMode::Effect => self.effect,
        }
    }
}
