//! DuPPa I2C Encoder V2 adapter.
//!
//! Thin bring-up wrapper: programs the chip from an [`AdapterConfig`], then
//! serves the [`DriverAdapter`] contract by reading the status register
//! whenever the active-low INT line is asserted. Bus failures at runtime are
//! logged and dropped, so the knob loop keeps running.

use crate::color::Rgb;
use crate::config::AdapterConfig;
use crate::error::Error;
use crate::event::{DriverAdapter, EncoderEvent};
use crate::registers::{self, gconf};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::i2c::I2c;

/// Time the chip needs after a soft reset before it accepts writes.
const RESET_SETTLE_US: u32 = 400;

/// Encoder chip on an I²C bus with its INT line.
pub struct I2cEncoder<I2C, INT> {
    i2c: I2C,
    int_pin: INT,
    config: AdapterConfig,
}

impl<I2C, INT> I2cEncoder<I2C, INT>
where
    I2C: I2c,
    INT: InputPin,
{
    pub fn new(i2c: I2C, int_pin: INT, config: AdapterConfig) -> Self {
        Self {
            i2c,
            int_pin,
            config,
        }
    }

    /// Reset the chip and program counter, debounce, fade and interrupts.
    pub fn begin(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I2C::Error>> {
        let cfg = self.config;

        self.write_u8(registers::GCONF, gconf::RESET)?;
        delay.delay_us(RESET_SETTLE_US);

        self.write_u8(registers::GCONF, cfg.gconf())?;
        self.write_i32(registers::CVAL, 0)?;
        self.write_i32(registers::CMAX, cfg.counter_max)?;
        self.write_i32(registers::CMIN, cfg.counter_min)?;
        self.write_i32(registers::ISTEP, cfg.counter_step)?;
        self.write_u8(registers::ANTBOUNC, cfg.debounce_ms)?;
        self.write_u8(registers::FADERGB, cfg.fade_ms)?;
        self.write_u8(registers::INTCONF, cfg.interrupt_sources)?;

        // Drop anything latched during configuration so INT starts released.
        self.read_status()?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Encoder @0x{:02x}: gconf=0x{:02x} int=0x{:02x}",
            cfg.address,
            cfg.gconf(),
            cfg.interrupt_sources
        );
        Ok(())
    }

    /// Poll once, surfacing bus and pin errors.
    pub fn try_poll(&mut self) -> Result<Option<EncoderEvent>, Error<I2C::Error>> {
        if !self.int_pin.is_low().map_err(|_| Error::Pin)? {
            return Ok(None);
        }
        let bits = self.read_status()?;
        #[cfg(feature = "defmt")]
        defmt::debug!("Encoder status 0x{:02x}", bits);
        Ok(EncoderEvent::from_status(bits))
    }

    /// Write an LED colour, surfacing bus errors.
    pub fn try_set_color(&mut self, color: Rgb) -> Result<(), Error<I2C::Error>> {
        let [r, g, b] = color.to_bytes();
        self.i2c
            .write(self.config.address, &[registers::RLED, r, g, b])?;
        Ok(())
    }

    fn read_status(&mut self) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.config.address, &[registers::ESTATUS], &mut buf)?;
        Ok(buf[0])
    }

    fn write_u8(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.config.address, &[register, value])?;
        Ok(())
    }

    fn write_i32(&mut self, register: u8, value: i32) -> Result<(), Error<I2C::Error>> {
        let bytes = value.to_be_bytes();

        // Full write buffer: [register, b3, b2, b1, b0]
        let mut buf = [0u8; 5];
        buf[0] = register;
        buf[1..5].copy_from_slice(&bytes);

        self.i2c.write(self.config.address, &buf)?;
        Ok(())
    }
}

impl<I2C, INT> DriverAdapter for I2cEncoder<I2C, INT>
where
    I2C: I2c,
    INT: InputPin,
{
    fn poll_pending_event(&mut self) -> Option<EncoderEvent> {
        match self.try_poll() {
            Ok(event) => event,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Encoder poll failed: {}", _e);
                None
            }
        }
    }

    fn set_indicator_color(&mut self, color: Rgb) {
        if let Err(_e) = self.try_set_color(color) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Encoder LED write failed: {}", _e);
        }
    }
}
