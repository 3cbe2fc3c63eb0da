//! Embedded TOML configuration reader
//!
//! A minimal flat reader for monitor.toml: `[section]` headers and
//! `key = value` pairs with integer and string values. It handles only
//! the subset the monitor needs; build.rs validates the full file with a
//! real TOML parser on the host. Unknown sections and keys are ignored so
//! the file can grow without breaking older firmware.

use vigil_core::config::MonitorConfig;
use vigil_protocol::ChecksumPolicy;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A known key carries a value that does not parse
    InvalidValue,
}

/// Parse monitor.toml content over the built-in defaults
pub fn parse_config(input: &str) -> Result<MonitorConfig, ConfigError> {
    let mut config = MonitorConfig::default();
    let mut section = "";

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Section header
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = header.trim();
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match (section, key) {
            ("serial", "baud") => config.baud = parse_int(value)?,
            ("link", "data_timeout_ms") => config.data_timeout_ms = parse_int(value)?,
            ("link", "poll_delay_ms") => config.poll_delay_ms = parse_int(value)?,
            ("link", "checksum") => config.checksum = parse_checksum(value)?,
            ("power", "save_delay_ms") => config.power_save_delay_ms = parse_int(value)?,
            ("power", "save_poll_delay_ms") => config.save_poll_delay_ms = parse_int(value)?,
            ("power", "normal_cpu_mhz") => config.normal_cpu_mhz = parse_int(value)?,
            ("power", "save_cpu_mhz") => config.save_cpu_mhz = parse_int(value)?,
            ("display", "refresh_ms") => config.refresh_ms = parse_int(value)?,
            ("display", "normal_backlight") => config.normal_backlight = parse_int(value)?,
            ("display", "save_backlight") => config.save_backlight = parse_int(value)?,
            _ => {}
        }
    }

    Ok(config)
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

fn parse_checksum(value: &str) -> Result<ChecksumPolicy, ConfigError> {
    match value.trim_matches('"') {
        "accept-any" => Ok(ChecksumPolicy::AcceptAny),
        "sum-mod-1000" => Ok(ChecksumPolicy::SumMod1000),
        _ => Err(ConfigError::InvalidValue),
    }
}
