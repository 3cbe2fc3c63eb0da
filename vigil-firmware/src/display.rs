//! ANSI terminal display backend
//!
//! The panel hangs off the terminal UART and understands ANSI truecolor
//! escapes, so rendering is plain styled text: labels in the default
//! foreground, values in their field color. Draw calls stage bytes in
//! memory; [`AnsiTerminal::write_out`] ships the whole frame in one
//! asynchronous write so a slow link never stalls mid-screen.

use core::fmt::Write as _;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use heapless::{String, Vec};

use vigil_display::{DisplayBackend, DisplayError, Rgb};

/// Staging capacity for one full screen update
const STAGE_CAP: usize = 512;

/// Terminal backend over the display UART
pub struct AnsiTerminal {
    tx: BufferedUartTx,
    staged: Vec<u8, STAGE_CAP>,
}

impl AnsiTerminal {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self {
            tx,
            staged: Vec::new(),
        }
    }

    fn push_str(&mut self, text: &str) -> Result<(), DisplayError> {
        self.staged
            .extend_from_slice(text.as_bytes())
            .map_err(|_| DisplayError::BufferOverflow)
    }

    /// Ship the staged frame over the UART
    ///
    /// The staging buffer empties either way; a failed write drops the
    /// frame and the next refresh repaints from scratch.
    pub async fn write_out(&mut self) -> Result<(), DisplayError> {
        let result = self.tx.write_all(&self.staged).await;
        self.staged.clear();
        result.map_err(|_| DisplayError::Communication)
    }
}

impl DisplayBackend for AnsiTerminal {
    fn clear(&mut self) -> Result<(), DisplayError> {
        // Home the cursor, then clear the screen
        self.push_str("\x1b[H\x1b[2J")
    }

    fn draw_field(
        &mut self,
        row: u8,
        label: &str,
        value: &str,
        color: Rgb,
    ) -> Result<(), DisplayError> {
        let mut line: String<80> = String::new();
        let _ = write!(
            line,
            "\x1b[{};1H\x1b[0m{} \x1b[38;2;{};{};{}m{}\x1b[0m",
            row + 1,
            label,
            color.r,
            color.g,
            color.b,
            value
        );
        self.push_str(&line)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        // The actual UART write happens in write_out; a direct panel
        // driver would blit here instead
        Ok(())
    }
}
