//! Register map of the DuPPa I2C Encoder V2 (RGB variant).
//!
//! Only the registers touched during bring-up, status polling and LED
//! updates are listed. Multi-byte registers are big-endian.

/// General configuration.
pub const GCONF: u8 = 0x00;
/// Interrupt source enable mask (bits from [`status`]).
pub const INTCONF: u8 = 0x04;
/// Encoder status; reading clears it and releases the INT line.
pub const ESTATUS: u8 = 0x05;
/// Counter value (i32).
pub const CVAL: u8 = 0x08;
/// Counter maximum (i32).
pub const CMAX: u8 = 0x0C;
/// Counter minimum (i32).
pub const CMIN: u8 = 0x10;
/// Counter increment step (i32).
pub const ISTEP: u8 = 0x14;
/// Red LED channel; green and blue follow at +1 and +2.
pub const RLED: u8 = 0x18;
/// Anti-bounce period.
pub const ANTBOUNC: u8 = 0x1E;
/// RGB fade step (ms).
pub const FADERGB: u8 = 0x20;

/// `GCONF` bit values. Cleared bits select the opposite option.
pub mod gconf {
    pub const WRAP_ENABLE: u8 = 0x02;
    pub const DIRE_LEFT: u8 = 0x04;
    pub const IPUP_DISABLE: u8 = 0x08;
    pub const RMOD_X2: u8 = 0x10;
    pub const RGB_ENCODER: u8 = 0x20;
    pub const RESET: u8 = 0x80;
}

/// `ESTATUS` / `INTCONF` bit values.
pub mod status {
    /// Push button released.
    pub const PUSHR: u8 = 0x01;
    /// Push button pressed.
    pub const PUSHP: u8 = 0x02;
    /// Push button double push.
    pub const PUSHD: u8 = 0x04;
    /// Rotated in the increment direction.
    pub const RINC: u8 = 0x08;
    /// Rotated in the decrement direction.
    pub const RDEC: u8 = 0x10;
    /// Counter reached its maximum.
    pub const RMAX: u8 = 0x20;
    /// Counter reached its minimum.
    pub const RMIN: u8 = 0x40;
    /// Secondary interrupt status pending.
    pub const INT_2: u8 = 0x80;
}
