//! Build script for vigil-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates monitor.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate monitor.toml at compile time
///
/// Catches syntax errors and out-of-bounds values on the host before a
/// broken config ever reaches the board.
fn validate_config() {
    println!("cargo:rerun-if-changed=monitor.toml");

    let config_path = Path::new("monitor.toml");
    if !config_path.exists() {
        panic!("monitor.toml not found - the firmware embeds it at build time");
    }

    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("failed to read monitor.toml: {e}"));

    let config: toml::Value = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid TOML syntax in monitor.toml:\n{e}"));

    check_range(&config, "link", "data_timeout_ms", 100, 600_000);
    check_range(&config, "link", "poll_delay_ms", 1, 1000);
    check_range(&config, "power", "save_delay_ms", 100, 3_600_000);
    check_range(&config, "power", "save_poll_delay_ms", 1, 10_000);
    check_range(&config, "power", "normal_cpu_mhz", 1, 133);
    check_range(&config, "power", "save_cpu_mhz", 1, 133);
    check_range(&config, "display", "refresh_ms", 50, 60_000);
    check_range(&config, "display", "normal_backlight", 0, 100);
    check_range(&config, "display", "save_backlight", 0, 100);

    if let (Some(normal), Some(save)) = (
        lookup(&config, "power", "normal_cpu_mhz"),
        lookup(&config, "power", "save_cpu_mhz"),
    ) {
        if save > normal {
            panic!("monitor.toml: power.save_cpu_mhz must not exceed power.normal_cpu_mhz");
        }
    }

    if let Some(policy) = config
        .get("link")
        .and_then(|s| s.get("checksum"))
        .and_then(|v| v.as_str())
    {
        if !matches!(policy, "accept-any" | "sum-mod-1000") {
            panic!(
                "monitor.toml: link.checksum must be \"accept-any\" or \"sum-mod-1000\", got {policy:?}"
            );
        }
    }
}

fn lookup(config: &toml::Value, section: &str, key: &str) -> Option<i64> {
    config.get(section)?.get(key)?.as_integer()
}

fn check_range(config: &toml::Value, section: &str, key: &str, min: i64, max: i64) {
    if let Some(value) = lookup(config, section, key) {
        if value < min || value > max {
            panic!("monitor.toml: {section}.{key} = {value} is outside [{min}, {max}]");
        }
    }
}
