//! Field text formatters.
//!
//! Values carry their units inline and optional data collapses to
//! "(not available)". Network throughput switches between KB/s and MB/s
//! at the 1 MB/s boundary, per direction.

use core::fmt::Write;
use heapless::String;

/// Longest formatted value in bytes
pub const VALUE_LEN: usize = 20;

/// One formatted field value
pub type Value = String<VALUE_LEN>;

const NOT_AVAILABLE: &str = "(not available)";

/// CPU load, with the clock appended when the host reports one
pub fn cpu(percent: f32, freq_ghz: f32) -> Value {
    let mut s = Value::new();
    if freq_ghz > 0.0 {
        let _ = write!(s, "{percent:.1}% {freq_ghz:.1}GHz");
    } else {
        let _ = write!(s, "{percent:.1}%");
    }
    s
}

/// GPU load; hosts without a GPU sensor report zero
pub fn gpu(percent: f32) -> Value {
    let mut s = Value::new();
    if percent > 0.0 {
        let _ = write!(s, "{percent:.1}%");
    } else {
        let _ = s.push_str(NOT_AVAILABLE);
    }
    s
}

/// RAM load, with used/total gigabytes when both are known
pub fn ram(percent: f32, used_gb: f32, total_gb: f32) -> Value {
    let mut s = Value::new();
    if used_gb > 0.0 && total_gb > 0.0 {
        let _ = write!(s, "{percent:.1}% {used_gb:.1}/{total_gb:.1}GB");
    } else {
        let _ = write!(s, "{percent:.1}%");
    }
    s
}

/// Temperature, with the fan speed when one is reported
pub fn temp(celsius: f32, fan_rpm: u16) -> Value {
    let mut s = Value::new();
    if fan_rpm > 0 {
        let _ = write!(s, "{celsius:.1}°C {fan_rpm}rpm");
    } else {
        let _ = write!(s, "{celsius:.1}°C");
    }
    s
}

/// Network throughput, download and upload
///
/// Each direction shows KB/s below 1 MB/s and MB/s from there up.
pub fn net(download_mbps: f32, upload_mbps: f32) -> Value {
    let mut s = Value::new();
    let download_kbps = download_mbps * 1024.0;
    let upload_kbps = upload_mbps * 1024.0;

    let _ = if download_mbps < 1.0 && upload_mbps < 1.0 {
        write!(s, "D{download_kbps:.0} U{upload_kbps:.0} KB/s")
    } else if download_mbps < 1.0 {
        write!(s, "D{download_kbps:.0}KB U{upload_mbps:.1}MB/s")
    } else if upload_mbps < 1.0 {
        write!(s, "D{download_mbps:.1}MB U{upload_kbps:.0}KB/s")
    } else {
        write!(s, "D{download_mbps:.1} U{upload_mbps:.1} MB/s")
    };
    s
}

/// Battery charge and power draw; -1 means no battery is present
pub fn battery(percent: i16, power_watts: f32) -> Value {
    let mut s = Value::new();
    if percent >= 0 && power_watts >= 0.0 {
        let _ = write!(s, "{percent}% {power_watts:.1}W");
    } else {
        let _ = s.push_str(NOT_AVAILABLE);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_with_and_without_clock() {
        assert_eq!(cpu(45.2, 3.8).as_str(), "45.2% 3.8GHz");
        assert_eq!(cpu(45.2, 0.0).as_str(), "45.2%");
    }

    #[test]
    fn test_gpu_unavailable() {
        assert_eq!(gpu(12.0).as_str(), "12.0%");
        assert_eq!(gpu(0.0).as_str(), "(not available)");
    }

    #[test]
    fn test_ram_with_gigabytes() {
        assert_eq!(ram(67.8, 11.9, 31.3).as_str(), "67.8% 11.9/31.3GB");
        assert_eq!(ram(67.8, 0.0, 31.3).as_str(), "67.8%");
        assert_eq!(ram(67.8, 0.0, 0.0).as_str(), "67.8%");
    }

    #[test]
    fn test_temp_with_fan() {
        assert_eq!(temp(58.5, 1500).as_str(), "58.5°C 1500rpm");
        assert_eq!(temp(58.5, 0).as_str(), "58.5°C");
    }

    #[test]
    fn test_net_both_slow() {
        // 0.5 MB/s = 512 KB/s
        assert_eq!(net(0.5, 0.25).as_str(), "D512 U256 KB/s");
    }

    #[test]
    fn test_net_mixed_speeds() {
        assert_eq!(net(0.5, 15.2).as_str(), "D512KB U15.2MB/s");
        assert_eq!(net(125.5, 0.5).as_str(), "D125.5MB U512KB/s");
    }

    #[test]
    fn test_net_both_fast() {
        assert_eq!(net(125.5, 15.2).as_str(), "D125.5 U15.2 MB/s");
    }

    #[test]
    fn test_net_unit_boundary() {
        // Exactly 1 MB/s is already megabytes
        assert_eq!(net(1.0, 1.0).as_str(), "D1.0 U1.0 MB/s");
        assert_eq!(net(1.0, 0.0).as_str(), "D1.0MB U0KB/s");
    }

    #[test]
    fn test_battery() {
        assert_eq!(battery(85, 10.5).as_str(), "85% 10.5W");
        assert_eq!(battery(85, 0.0).as_str(), "85% 0.0W");
        assert_eq!(battery(-1, 10.5).as_str(), "(not available)");
    }
}
