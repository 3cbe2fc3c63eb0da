//! Telemetry frame parsing.
//!
//! A frame is a comma-separated list of `LABEL:value` markers. Marker
//! order is free; lookup splits on `,` and then on the first `:` per
//! token. A token without a colon continues the preceding compound marker
//! (`NET:<down>,<up>` spans two tokens on the wire).
//!
//! Parsing is all-or-nothing: it returns either a fully validated
//! [`TelemetryReading`] or a rejection reason, never a partial record.
//! Optional fields start from their defaults on every parse, so a value
//! absent from the current frame can never leak through from an earlier
//! one.

use crate::numeric::{parse_f32, parse_i32};

/// Required markers, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequiredField {
    Cpu,
    Ram,
    Temp,
}

impl RequiredField {
    /// The wire label for this field
    pub fn marker(self) -> &'static str {
        match self {
            RequiredField::Cpu => "CPU",
            RequiredField::Ram => "RAM",
            RequiredField::Temp => "TEMP",
        }
    }
}

/// Reasons a frame is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No `CHK` marker anywhere in the frame
    ChecksumMissing,
    /// Checksum verification is enabled and the value does not match
    ChecksumMismatch,
    /// A required marker is absent
    MissingField(RequiredField),
    /// A required field is present but outside its valid bound
    ValueOutOfRange,
}

/// How to treat the `CHK` marker
///
/// The marker itself is always structurally required. The sender computes
/// the integer sum of every numeric value in the frame, mod 1000; whether
/// the monitor checks that value is a policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChecksumPolicy {
    /// Accept any checksum value; only its presence is required
    #[default]
    AcceptAny,
    /// Verify the value against the sender's sum-mod-1000 algorithm
    SumMod1000,
}

/// One validated metrics snapshot
///
/// `cpu_usage` and `ram_usage` are percentages in [0, 100];
/// `temperature` is degrees Celsius in [0, 150]. All other fields are
/// optional on the wire and hold their documented default when absent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetryReading {
    pub cpu_usage: f32,
    pub ram_usage: f32,
    pub temperature: f32,

    pub cpu_freq_ghz: f32,
    pub gpu_usage: f32,
    pub ram_used_gb: f32,
    pub ram_total_gb: f32,
    pub fan_rpm: u16,
    pub net_download_mbps: f32,
    pub net_upload_mbps: f32,
    /// Battery charge percentage; -1 means unknown
    pub battery_percent: i16,
    pub power_watts: f32,
}

impl Default for TelemetryReading {
    fn default() -> Self {
        Self {
            cpu_usage: 0.0,
            ram_usage: 0.0,
            temperature: 0.0,
            cpu_freq_ghz: 0.0,
            gpu_usage: 0.0,
            ram_used_gb: 0.0,
            ram_total_gb: 0.0,
            fan_rpm: 0,
            net_download_mbps: 0.0,
            net_upload_mbps: 0.0,
            battery_percent: -1,
            power_watts: 0.0,
        }
    }
}

impl TelemetryReading {
    /// Parse one candidate frame.
    ///
    /// Unknown labels are ignored; a duplicated label takes its last
    /// occurrence. A present-but-garbled optional marker keeps the field
    /// default and never fails the frame.
    pub fn parse(line: &str, policy: ChecksumPolicy) -> Result<Self, ParseError> {
        let mut reading = Self::default();
        let mut cpu = None;
        let mut ram = None;
        let mut temp = None;
        let mut checksum = None;
        // Running sum of every numeric value, for SumMod1000
        let mut value_sum = 0.0f32;

        let mut tokens = line.split(',').peekable();
        while let Some(token) = tokens.next() {
            let Some((label, value)) = token.split_once(':') else {
                // Continuation of a compound marker, consumed below
                continue;
            };

            match label.trim() {
                "CPU" => {
                    let v = parse_f32(value);
                    cpu = Some(v);
                    value_sum += v;
                }
                "RAM" => {
                    let v = parse_f32(value);
                    ram = Some(v);
                    value_sum += v;
                }
                "TEMP" => {
                    let v = parse_f32(value);
                    temp = Some(v);
                    value_sum += v;
                }
                "FREQ" => {
                    reading.cpu_freq_ghz = parse_f32(value);
                    value_sum += reading.cpu_freq_ghz;
                }
                "GPU" => {
                    reading.gpu_usage = parse_f32(value);
                    value_sum += reading.gpu_usage;
                }
                "RAMGB" => {
                    if let Some((used, total)) = value.split_once('/') {
                        reading.ram_used_gb = parse_f32(used);
                        reading.ram_total_gb = parse_f32(total);
                        value_sum += reading.ram_used_gb + reading.ram_total_gb;
                    }
                }
                "FAN" => {
                    reading.fan_rpm = parse_i32(value).clamp(0, i32::from(u16::MAX)) as u16;
                    value_sum += f32::from(reading.fan_rpm);
                }
                "NET" => {
                    reading.net_download_mbps = parse_f32(value);
                    // The upload half lands in the next comma token
                    if let Some(next) = tokens.peek().copied() {
                        if !next.contains(':') {
                            reading.net_upload_mbps = parse_f32(next);
                            tokens.next();
                        }
                    }
                    value_sum += reading.net_download_mbps + reading.net_upload_mbps;
                }
                "BAT" => {
                    reading.battery_percent =
                        parse_i32(value).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
                    value_sum += f32::from(reading.battery_percent);
                }
                "POWER" => {
                    reading.power_watts = parse_f32(value);
                    value_sum += reading.power_watts;
                }
                "CHK" => checksum = Some(parse_i32(value)),
                _ => {}
            }
        }

        let Some(checksum) = checksum else {
            return Err(ParseError::ChecksumMissing);
        };
        if policy == ChecksumPolicy::SumMod1000 && (value_sum as i32).rem_euclid(1000) != checksum {
            return Err(ParseError::ChecksumMismatch);
        }

        reading.cpu_usage = cpu.ok_or(ParseError::MissingField(RequiredField::Cpu))?;
        reading.ram_usage = ram.ok_or(ParseError::MissingField(RequiredField::Ram))?;
        reading.temperature = temp.ok_or(ParseError::MissingField(RequiredField::Temp))?;

        if !(0.0..=100.0).contains(&reading.cpu_usage)
            || !(0.0..=100.0).contains(&reading.ram_usage)
            || !(0.0..=150.0).contains(&reading.temperature)
        {
            return Err(ParseError::ValueOutOfRange);
        }

        Ok(reading)
    }
}
