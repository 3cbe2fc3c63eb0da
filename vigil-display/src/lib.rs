//! Status screen rendering for the Vigil desk monitor
//!
//! This crate provides:
//! - `Rgb` and the percentage color gradient
//! - Per-field text formatters with unit-scaling thresholds
//! - The six-field `Screen` buffer and the `Renderer` that fills it from
//!   the committed metrics
//! - The `DisplayBackend` trait hardware sinks implement
//!
//! # Architecture
//!
//! The monitor loop owns a `Renderer` and replays its screen through a
//! `DisplayBackend` at a bounded cadence. Backends can drive a panel
//! directly over SPI/I2C or ship styled text to an external terminal; the
//! firmware ships an ANSI terminal backend over UART.

#![no_std]

pub mod backend;
pub mod color;
pub mod format;
pub mod screen;

pub use backend::{DisplayBackend, DisplayError};
pub use color::Rgb;
pub use screen::{FieldSlot, Renderer, Screen};
