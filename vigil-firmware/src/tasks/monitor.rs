//! Main monitor task
//!
//! One poll-driven loop owns everything: it drains whatever host bytes
//! have arrived through the line accumulator and parser, evaluates the
//! link monitor and power policy, and refreshes the terminal at a bounded
//! cadence. Nothing blocks waiting for input; the read either completes
//! with available bytes or the idle timer fires and the policies run
//! anyway. The idle delay stretches in power save to cut the duty cycle.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_time::{Instant, Timer};
use embedded_io_async::Read;

use vigil_core::config::MonitorConfig;
use vigil_core::link::LinkMonitor;
use vigil_core::metrics::Metrics;
use vigil_core::power::{PowerPolicy, PowerTransition};
use vigil_core::traits::{Backlight, CpuThrottle};
use vigil_display::Renderer;
use vigil_protocol::{LineAccumulator, TelemetryReading};

use crate::board::{PwmBacklight, SysClockThrottle};
use crate::display::AnsiTerminal;

/// UART read chunk size
const RX_CHUNK: usize = 64;

/// Monitor task - the whole monitor lives in this loop
#[embassy_executor::task]
pub async fn monitor_task(
    mut host_rx: BufferedUartRx,
    term_tx: BufferedUartTx,
    mut backlight: PwmBacklight,
    mut throttle: SysClockThrottle,
    config: &'static MonitorConfig,
) {
    info!("Monitor task started, waiting for host data");

    let mut metrics = Metrics::new();
    let mut accumulator = LineAccumulator::new();
    let link = LinkMonitor::new(config.data_timeout_ms);
    let power = PowerPolicy::new(config.power_save_delay_ms);
    let mut renderer = Renderer::new();
    let mut terminal = AnsiTerminal::new(term_tx);

    backlight.set_level(config.normal_backlight);
    throttle.set_frequency_mhz(config.normal_cpu_mhz);

    // Paint the all-defaults screen before the first frame arrives
    render(&mut renderer, &mut terminal, &metrics).await;

    let mut buf = [0u8; RX_CHUNK];
    let mut last_render_ms = Instant::now().as_millis();

    loop {
        let idle_ms = if metrics.power_save {
            config.save_poll_delay_ms
        } else {
            config.poll_delay_ms
        };

        // Drain available host bytes, or let the idle timer release us
        match select(host_rx.read(&mut buf), Timer::after_millis(u64::from(idle_ms))).await {
            Either::First(Ok(n)) => {
                for &byte in &buf[..n] {
                    process_byte(&mut accumulator, &mut metrics, config, byte);
                }
            }
            Either::First(Err(e)) => {
                warn!("Host UART read error: {:?}", e);
            }
            Either::Second(()) => {}
        }

        let now_ms = Instant::now().as_millis();

        if link.poll(&mut metrics, now_ms) {
            warn!("Connection lost - no data received");
        }

        match power.poll(&mut metrics, now_ms) {
            Some(PowerTransition::EnterSave) => {
                info!("Entering power save mode");
                backlight.set_level(config.save_backlight);
                throttle.set_frequency_mhz(config.save_cpu_mhz);
                debug!("System clock now {} MHz", throttle.frequency_mhz());
            }
            Some(PowerTransition::ExitSave) => {
                info!("Leaving power save mode");
                backlight.set_level(config.normal_backlight);
                throttle.set_frequency_mhz(config.normal_cpu_mhz);
            }
            None => {}
        }

        if now_ms.saturating_sub(last_render_ms) >= u64::from(config.refresh_ms) {
            last_render_ms = now_ms;
            render(&mut renderer, &mut terminal, &metrics).await;
        }
    }
}

/// Push one host byte through the accumulator and, on a complete line,
/// the parser
///
/// Frame-level failures are logged and dropped; they never touch the
/// committed record and the next frame starts clean.
fn process_byte(
    accumulator: &mut LineAccumulator,
    metrics: &mut Metrics,
    config: &MonitorConfig,
    byte: u8,
) {
    match accumulator.feed(byte) {
        Ok(Some(line)) => match TelemetryReading::parse(line.as_str(), config.checksum) {
            Ok(reading) => {
                if metrics.commit(reading, Instant::now().as_millis()) {
                    info!("Connection restored");
                }
            }
            Err(e) => {
                warn!("Frame rejected: {:?}", e);
            }
        },
        Ok(None) => {}
        Err(e) => {
            warn!("Frame discarded: {:?}", e);
        }
    }
}

/// Rebuild the screen from the committed record and ship it
async fn render(renderer: &mut Renderer, terminal: &mut AnsiTerminal, metrics: &Metrics) {
    renderer.render(metrics);
    if let Err(e) = renderer.screen().flush_to(terminal) {
        warn!("Screen staging failed: {:?}", e);
        return;
    }
    if let Err(e) = terminal.write_out().await {
        warn!("Terminal write failed: {:?}", e);
    }
}
