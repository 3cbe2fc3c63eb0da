//! Vigil - Desk Telemetry Monitor Firmware
//!
//! RP2040 firmware for a small desk display that mirrors a host PC's
//! vital signs. The host streams one metrics line per second over the
//! serial link; the firmware parses it, renders a six-field status
//! screen, and dims the backlight and system clock when the host goes
//! quiet.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use vigil_core::config::MonitorConfig;

mod board;
mod config;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
static HOST_TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static HOST_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static TERM_TX_BUF: StaticCell<[u8; 512]> = StaticCell::new();
static TERM_RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

// Configuration must outlive the monitor task
static CONFIG: StaticCell<MonitorConfig> = StaticCell::new();

/// Embedded configuration (compiled into firmware)
/// Edit monitor.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../monitor.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Vigil firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config: &'static MonitorConfig = CONFIG.init(load_config());

    // UART0: host telemetry in
    let mut host_uart_config = UartConfig::default();
    host_uart_config.baudrate = config.baud;
    let host_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, host_uart_config);
    let host_uart = host_uart.into_buffered(
        Irqs,
        HOST_TX_BUF.init([0u8; 64]),
        HOST_RX_BUF.init([0u8; 256]),
    );
    let (_host_tx, host_rx) = host_uart.split();
    info!("Host UART initialized at {} baud", config.baud);

    // UART1: terminal display out
    let term_uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, UartConfig::default());
    let term_uart = term_uart.into_buffered(
        Irqs,
        TERM_TX_BUF.init([0u8; 512]),
        TERM_RX_BUF.init([0u8; 16]),
    );
    let (term_tx, _term_rx) = term_uart.split();
    info!("Terminal UART initialized");

    // Backlight PWM (GPIO16, slice 0 channel A)
    let backlight_pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, PwmConfig::default());
    let backlight = board::PwmBacklight::new(backlight_pwm);

    // System clock throttle for power save
    let throttle = board::SysClockThrottle::new(config.normal_cpu_mhz);

    spawner
        .spawn(tasks::monitor_task(
            host_rx, term_tx, backlight, throttle, config,
        ))
        .unwrap();

    info!("Monitor task spawned, firmware running");

    // All work happens in the monitor task
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded configuration, falling back to defaults
///
/// build.rs validates monitor.toml on the host, so a parse failure here
/// means the reader and the file disagree; the monitor still comes up on
/// defaults rather than refusing to boot.
fn load_config() -> MonitorConfig {
    match config::parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Configuration loaded from embedded monitor.toml");
            config
        }
        Err(_) => {
            warn!("Invalid embedded configuration, using defaults");
            MonitorConfig::default()
        }
    }
}
