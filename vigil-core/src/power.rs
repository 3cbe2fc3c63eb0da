//! Power-save policy.
//!
//! After the link has been down for the configured delay the monitor dims
//! its backlight and drops the processor clock; both are restored the
//! moment the link returns. The policy only decides *when*; the hardware
//! side effects belong to the [`crate::traits`] collaborators.

use crate::metrics::Metrics;

/// Hardware transitions the policy can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerTransition {
    /// Dim the backlight and reduce the system clock
    EnterSave,
    /// Restore the backlight and the system clock
    ExitSave,
}

/// Decides when to enter and leave power save
#[derive(Debug, Clone)]
pub struct PowerPolicy {
    delay_ms: u32,
}

impl PowerPolicy {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    /// Evaluate the policy, once per loop iteration
    ///
    /// Power save engages only after the link has been down for the
    /// configured delay and releases as soon as the link is back. Each
    /// direction fires exactly once per mode change, so re-polling in the
    /// same mode is a no-op.
    pub fn poll(&self, metrics: &mut Metrics, now_ms: u64) -> Option<PowerTransition> {
        if metrics.connected {
            if metrics.power_save {
                metrics.power_save = false;
                return Some(PowerTransition::ExitSave);
            }
        } else if !metrics.power_save
            && now_ms.saturating_sub(metrics.disconnect_ms) > u64::from(self.delay_ms)
        {
            metrics.power_save = true;
            return Some(PowerTransition::EnterSave);
        }
        None
    }
}
