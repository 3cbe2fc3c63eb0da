//! Board-agnostic core logic for the Vigil desk monitor
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - The `Metrics` state object: the committed telemetry record plus
//!   link and power bookkeeping
//! - `LinkMonitor`: declares the host link up or down from wall-clock
//!   gaps between accepted frames
//! - `PowerPolicy`: enters and leaves power save after sustained link loss
//! - Hardware collaborator traits (backlight, processor clock)
//! - `MonitorConfig`: tunable timing and level constants
//!
//! Time is plain milliseconds (`u64`) everywhere so every policy is
//! testable on the host without a clock source.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod link;
pub mod metrics;
pub mod power;
pub mod traits;

pub use config::MonitorConfig;
pub use link::LinkMonitor;
pub use metrics::Metrics;
pub use power::{PowerPolicy, PowerTransition};
