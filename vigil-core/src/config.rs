//! Monitor configuration types
//!
//! Defaults match the values the firmware ships with; the firmware can
//! override any of them from an embedded TOML file.

use vigil_protocol::ChecksumPolicy;

/// Milliseconds without an accepted frame before the link is declared lost
pub const DATA_TIMEOUT_MS: u32 = 5000;

/// Milliseconds after link loss before power save engages
pub const POWER_SAVE_DELAY_MS: u32 = 10_000;

/// Minimum milliseconds between display refreshes
pub const REFRESH_MS: u32 = 500;

/// Tunable monitor settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorConfig {
    /// Host serial link speed
    pub baud: u32,
    /// Milliseconds without an accepted frame before the link is lost
    pub data_timeout_ms: u32,
    /// Milliseconds after link loss before power save engages
    pub power_save_delay_ms: u32,
    /// Loop idle delay while the link is live
    pub poll_delay_ms: u32,
    /// Loop idle delay in power save, longer to cut the duty cycle
    pub save_poll_delay_ms: u32,
    /// Minimum milliseconds between display refreshes
    pub refresh_ms: u32,
    /// Backlight level during normal operation (0 = off)
    pub normal_backlight: u8,
    /// Backlight level in power save
    pub save_backlight: u8,
    /// System clock in MHz during normal operation
    pub normal_cpu_mhz: u16,
    /// System clock in MHz in power save
    pub save_cpu_mhz: u16,
    /// Checksum handling for inbound frames
    pub checksum: ChecksumPolicy,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            baud: 115_200,
            data_timeout_ms: DATA_TIMEOUT_MS,
            power_save_delay_ms: POWER_SAVE_DELAY_MS,
            poll_delay_ms: 5,
            save_poll_delay_ms: 100,
            refresh_ms: REFRESH_MS,
            normal_backlight: 5,
            save_backlight: 0,
            normal_cpu_mhz: 125,
            save_cpu_mhz: 62,
            checksum: ChecksumPolicy::AcceptAny,
        }
    }
}
