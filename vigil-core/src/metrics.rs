//! The committed metrics record.

use vigil_protocol::TelemetryReading;

/// Committed telemetry plus link and power bookkeeping
///
/// One instance lives for the whole process, owned by the main loop and
/// lent to each policy by reference. Only a fully validated frame replaces
/// `reading`; the bookkeeping fields move only through [`Metrics::commit`],
/// [`crate::link::LinkMonitor`] and [`crate::power::PowerPolicy`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Metrics {
    /// The last accepted reading
    pub reading: TelemetryReading,
    /// Timestamp of the last accepted frame
    pub last_update_ms: u64,
    /// Host link state; cleared only by the link monitor
    pub connected: bool,
    /// Power-save state; toggled only by the power policy
    pub power_save: bool,
    /// Timestamp the link was declared lost
    pub disconnect_ms: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create the startup record: default reading, link down
    pub fn new() -> Self {
        Self {
            reading: TelemetryReading::default(),
            last_update_ms: 0,
            connected: false,
            power_save: false,
            disconnect_ms: 0,
        }
    }

    /// Replace the committed reading after a successful parse
    ///
    /// Stamps `last_update_ms` and raises `connected`. Returns true when
    /// this commit restored a lost link.
    pub fn commit(&mut self, reading: TelemetryReading, now_ms: u64) -> bool {
        self.reading = reading;
        self.last_update_ms = now_ms;
        let restored = !self.connected;
        self.connected = true;
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_protocol::ChecksumPolicy;

    #[test]
    fn test_starts_disconnected_with_defaults() {
        let metrics = Metrics::new();
        assert!(!metrics.connected);
        assert!(!metrics.power_save);
        assert_eq!(metrics.reading, TelemetryReading::default());
    }

    #[test]
    fn test_commit_stamps_and_connects() {
        let mut metrics = Metrics::new();
        let reading = TelemetryReading {
            cpu_usage: 45.2,
            ..TelemetryReading::default()
        };

        assert!(metrics.commit(reading, 1234));
        assert!(metrics.connected);
        assert_eq!(metrics.last_update_ms, 1234);
        assert_eq!(metrics.reading.cpu_usage, 45.2);

        // A second commit is not a restore
        assert!(!metrics.commit(reading, 2000));
        assert_eq!(metrics.last_update_ms, 2000);
    }

    #[test]
    fn test_optional_fields_never_carry_over() {
        let mut metrics = Metrics::new();
        let full = TelemetryReading::parse(
            "CPU:45.2,RAM:67.8,TEMP:58.5,GPU:12.0,FAN:1500,BAT:85,CHK:1",
            ChecksumPolicy::AcceptAny,
        )
        .unwrap();
        metrics.commit(full, 100);
        assert_eq!(metrics.reading.fan_rpm, 1500);

        // The next frame omits every optional field; the committed record
        // takes the defaults rather than keeping last frame's values
        let minimal =
            TelemetryReading::parse("CPU:50.0,RAM:60.0,TEMP:55.0,CHK:2", ChecksumPolicy::AcceptAny)
                .unwrap();
        metrics.commit(minimal, 200);
        assert_eq!(metrics.reading.gpu_usage, 0.0);
        assert_eq!(metrics.reading.fan_rpm, 0);
        assert_eq!(metrics.reading.battery_percent, -1);
    }

    #[test]
    fn test_rejected_frames_never_reach_the_record() {
        let mut metrics = Metrics::new();
        metrics.commit(
            TelemetryReading {
                cpu_usage: 45.2,
                ..TelemetryReading::default()
            },
            100,
        );
        let before = metrics.clone();

        // Missing TEMP, out-of-range CPU, no checksum: commit only runs
        // on Ok, so the committed record survives each of them
        for frame in [
            "CPU:45.2,RAM:67.8,CHK:123",
            "CPU:200,RAM:50,TEMP:40,CHK:1",
            "CPU:45.2,RAM:67.8,TEMP:58.5",
        ] {
            if let Ok(reading) = TelemetryReading::parse(frame, ChecksumPolicy::AcceptAny) {
                metrics.commit(reading, 200);
            }
            assert_eq!(metrics, before);
        }
    }
}
