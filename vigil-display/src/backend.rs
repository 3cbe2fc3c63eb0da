//! Display backend trait
//!
//! Defines the interface rendering sinks implement.

use crate::color::Rgb;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the sink
    Communication,
    /// Staging buffer exhausted
    BufferOverflow,
}

/// Hardware-agnostic rendering sink
///
/// Implementations draw one labeled value row per call: direct panel
/// drivers paint pixels, terminal backends emit styled text. The label
/// renders in the neutral foreground; only the value takes `color`.
pub trait DisplayBackend {
    /// Clear the whole display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw one field row
    fn draw_field(&mut self, row: u8, label: &str, value: &str, color: Rgb)
        -> Result<(), DisplayError>;

    /// Push staged content to the hardware
    ///
    /// For buffered sinks this is where the screen actually updates.
    fn flush(&mut self) -> Result<(), DisplayError>;
}
