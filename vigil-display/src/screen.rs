//! Six-field status screen.
//!
//! The screen mirrors the physical layout: six labeled rows, one metric
//! each, with the value text colored by the field's policy. Labels render
//! in the neutral foreground so only the value carries state.

use crate::backend::{DisplayBackend, DisplayError};
use crate::color::{self, Rgb};
use crate::format::{self, Value};
use vigil_core::metrics::Metrics;

/// Field rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldSlot {
    Cpu,
    Gpu,
    Ram,
    Temp,
    Net,
    Bat,
}

impl FieldSlot {
    pub const COUNT: usize = 6;

    pub const ALL: [FieldSlot; Self::COUNT] = [
        FieldSlot::Cpu,
        FieldSlot::Gpu,
        FieldSlot::Ram,
        FieldSlot::Temp,
        FieldSlot::Net,
        FieldSlot::Bat,
    ];

    /// Display row for this field
    pub fn row(self) -> u8 {
        self as u8
    }

    /// Static row label
    pub fn label(self) -> &'static str {
        match self {
            FieldSlot::Cpu => "CPU:",
            FieldSlot::Gpu => "GPU:",
            FieldSlot::Ram => "RAM:",
            FieldSlot::Temp => "TEMP:",
            FieldSlot::Net => "NET:",
            FieldSlot::Bat => "BAT:",
        }
    }
}

/// One rendered field: value text plus its color
#[derive(Debug, Clone, PartialEq, Eq)]
struct Field {
    value: Value,
    color: Rgb,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            value: Value::new(),
            color: Rgb::WHITE,
        }
    }
}

/// Screen buffer for the six metric fields
#[derive(Debug, Clone, Default)]
pub struct Screen {
    fields: [Field; FieldSlot::COUNT],
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value text and color
    pub fn set(&mut self, slot: FieldSlot, value: Value, color: Rgb) {
        self.fields[slot as usize] = Field { value, color };
    }

    /// A field's current value text
    pub fn value(&self, slot: FieldSlot) -> &str {
        self.fields[slot as usize].value.as_str()
    }

    /// A field's current color
    pub fn color(&self, slot: FieldSlot) -> Rgb {
        self.fields[slot as usize].color
    }

    /// Replay the whole screen through a backend: clear, six labeled
    /// rows, flush
    pub fn flush_to<B: DisplayBackend>(&self, backend: &mut B) -> Result<(), DisplayError> {
        backend.clear()?;
        for slot in FieldSlot::ALL {
            let field = &self.fields[slot as usize];
            backend.draw_field(slot.row(), slot.label(), field.value.as_str(), field.color)?;
        }
        backend.flush()
    }
}

/// Builds the screen from the committed metrics
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Recompute all six fields from the committed record
    pub fn render(&mut self, metrics: &Metrics) {
        let r = &metrics.reading;

        self.screen.set(
            FieldSlot::Cpu,
            format::cpu(r.cpu_usage, r.cpu_freq_ghz),
            color::pct_color(r.cpu_usage),
        );

        // No GPU sensor renders gray, not green
        let gpu_color = if r.gpu_usage > 0.0 {
            color::pct_color(r.gpu_usage)
        } else {
            Rgb::GRAY
        };
        self.screen
            .set(FieldSlot::Gpu, format::gpu(r.gpu_usage), gpu_color);

        self.screen.set(
            FieldSlot::Ram,
            format::ram(r.ram_usage, r.ram_used_gb, r.ram_total_gb),
            color::pct_color(r.ram_usage),
        );

        self.screen.set(
            FieldSlot::Temp,
            format::temp(r.temperature, r.fan_rpm),
            color::temp_color(r.temperature),
        );

        self.screen.set(
            FieldSlot::Net,
            format::net(r.net_download_mbps, r.net_upload_mbps),
            color::net_color(r.net_download_mbps + r.net_upload_mbps),
        );

        self.screen.set(
            FieldSlot::Bat,
            format::battery(r.battery_percent, r.power_watts),
            color::battery_color(r.battery_percent),
        );
    }
}
