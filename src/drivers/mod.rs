//! Hardware adapters over `embedded-hal` traits.

pub mod i2c_encoder;

pub use i2c_encoder::I2cEncoder;
