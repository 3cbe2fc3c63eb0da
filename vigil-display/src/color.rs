//! Color policy for metric fields.
//!
//! Percentages map onto a green→yellow→red gradient with the knee at 60%.
//! Temperature uses fixed tiers, network speed stays white while idle,
//! and the battery gradient runs the other way so a full charge is green.

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const COOL_BLUE: Rgb = Rgb::new(0, 174, 239);

    /// Blend two colors; ratio 255 selects `self`, 0 selects `other`
    pub fn mix(self, other: Rgb, ratio: u8) -> Rgb {
        let lerp = |a: u8, b: u8| {
            ((u16::from(a) * u16::from(ratio) + u16::from(b) * (255 - u16::from(ratio))) / 255)
                as u8
        };
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

/// Gradient breakpoint between the green→yellow and yellow→red segments
pub const GRADIENT_KNEE_PCT: f32 = 60.0;

/// Map a 0-100 percentage onto the green→yellow→red gradient
///
/// 0% is pure green, the knee is pure yellow, 100% is pure red; values
/// outside the range clamp to the nearest end.
pub fn pct_color(pct: f32) -> Rgb {
    let pct = pct.clamp(0.0, 100.0);
    if pct < GRADIENT_KNEE_PCT {
        let ratio = (pct / GRADIENT_KNEE_PCT * 255.0) as u8;
        Rgb::YELLOW.mix(Rgb::GREEN, ratio)
    } else {
        let ratio = ((pct - GRADIENT_KNEE_PCT) / (100.0 - GRADIENT_KNEE_PCT) * 255.0) as u8;
        Rgb::RED.mix(Rgb::YELLOW, ratio)
    }
}

/// Temperature tiers: cool blue, normal green, warm yellow, hot red
pub fn temp_color(celsius: f32) -> Rgb {
    if celsius >= 85.0 {
        Rgb::RED
    } else if celsius >= 70.0 {
        Rgb::YELLOW
    } else if celsius >= 50.0 {
        Rgb::GREEN
    } else {
        Rgb::COOL_BLUE
    }
}

/// Combined throughput color; idle links stay white
pub fn net_color(total_mbps: f32) -> Rgb {
    if total_mbps < 0.1 {
        Rgb::WHITE
    } else {
        pct_color(total_mbps.min(100.0))
    }
}

/// Battery gradient runs inverted: full is green, empty is red
///
/// An unknown level (-1) renders gray.
pub fn battery_color(percent: i16) -> Rgb {
    if percent < 0 {
        Rgb::GRAY
    } else {
        pct_color(100.0 - f32::from(percent).min(100.0))
    }
}
