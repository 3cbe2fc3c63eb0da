//! Board support: backlight PWM and system clock throttle.
//!
//! Pin assignments follow the reference carrier board: panel backlight on
//! GPIO16 (PWM slice 0, channel A). The panel itself hangs off the
//! terminal UART; this module only touches what the power policy needs.

use embassy_rp::pac;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use vigil_core::traits::{Backlight, CpuThrottle};

/// PWM counter top; duty maps 1:1 from the 0-100 level scale
const PWM_TOP: u16 = 100;

/// PWM-dimmed panel backlight
pub struct PwmBacklight {
    pwm: Pwm<'static>,
    level: u8,
}

impl PwmBacklight {
    /// Take ownership of the configured PWM output, starting dark
    pub fn new(pwm: Pwm<'static>) -> Self {
        let mut backlight = Self { pwm, level: 0 };
        backlight.apply();
        backlight
    }

    fn apply(&mut self) {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_a = u16::from(self.level);
        self.pwm.set_config(&config);
    }
}

impl Backlight for PwmBacklight {
    fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        self.apply();
    }

    fn level(&self) -> u8 {
        self.level
    }
}

/// Throttles the system clock with the CLK_SYS divider
///
/// The divider is glitch-free per the RP2040 datasheet, and the timer
/// peripheral runs from the reference clock, so embassy timing is
/// unaffected by changes here.
pub struct SysClockThrottle {
    normal_mhz: u16,
    current_mhz: u16,
}

impl SysClockThrottle {
    pub fn new(normal_mhz: u16) -> Self {
        Self {
            normal_mhz,
            current_mhz: normal_mhz,
        }
    }
}

impl CpuThrottle for SysClockThrottle {
    fn set_frequency_mhz(&mut self, mhz: u16) {
        let target = mhz.clamp(1, self.normal_mhz);
        // Integer divider only; rounds up to the nearest reachable step
        let div = (self.normal_mhz / target).max(1);
        pac::CLOCKS
            .clk_sys_div()
            .write(|w| w.set_int(u32::from(div)));
        self.current_mhz = self.normal_mhz / div;
    }

    fn frequency_mhz(&self) -> u16 {
        self.current_mhz
    }
}
