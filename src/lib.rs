//! RGB rotary-encoder knob controller.
//!
//! Turns the push-button encoder of a lighting controller into a two-mode
//! control surface: turning adjusts brightness or steps through effects, a
//! short press toggles the light, a long press switches mode (or restores a
//! preset when the light is off), and the knob's LED shows the active mode.
//!
//! The state machine in [`knob`] is pure logic and is tested on the host, as
//! is the chip adapter in [`drivers`], which only needs `embedded-hal` traits.
//!
//! Usage: `cargo test --lib` or `cargo test --test integration`
//!
//! The firmware binary (`src/main.rs`) and the Embassy glue in `task` are
//! only built with the `embedded` feature.

#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod config;
pub mod drivers;
pub mod error;
pub mod event;
pub mod host;
pub mod knob;
pub mod lighting;
pub mod registers;

#[cfg(feature = "embedded")]
pub mod task;

pub use color::{ModeColorTable, Rgb};
pub use config::{AdapterConfig, KnobConfig, LongPressRepeat};
pub use event::{Direction, DriverAdapter, EncoderEvent};
pub use host::{LightingHost, NotifyReason};
pub use knob::{KnobController, OperatingMode};
pub use lighting::{LightState, Preset};
