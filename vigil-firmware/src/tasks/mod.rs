//! Firmware tasks

pub mod monitor;

pub use monitor::monitor_task;
