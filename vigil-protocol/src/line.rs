//! Line accumulation for the serial telemetry stream.
//!
//! Telemetry frames arrive as newline-terminated ASCII, chunked arbitrarily
//! across UART reads. The accumulator buffers raw bytes and emits one
//! candidate line per terminator, with the terminator stripped.

use heapless::Vec;

/// Longest accepted frame in bytes, terminator excluded
pub const MAX_LINE_LEN: usize = 127;

/// Errors that can occur while accumulating a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// A frame outgrew the buffer before a terminator arrived; the buffer
    /// restarts from empty
    Overflow,
}

/// One newline-terminated telemetry frame, terminator stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8, MAX_LINE_LEN>,
}

impl Line {
    /// View the frame as text
    ///
    /// Frames are ASCII on the wire; anything that fails UTF-8 validation
    /// degrades to an empty line, which the parser then rejects.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes).unwrap_or("")
    }

    /// Raw frame bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Accumulates raw serial bytes into newline-delimited frames
///
/// Never waits for input; it only reacts to bytes as they arrive.
#[derive(Debug, Clone, Default)]
pub struct LineAccumulator {
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl LineAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty
    /// frame, `Ok(None)` when more bytes are needed. A terminator on an
    /// empty buffer is swallowed, which absorbs `\r\n` pairs. A data byte
    /// that would not fit discards the whole frame and reports
    /// [`LineError::Overflow`]; accumulation restarts from empty.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match byte {
            b'\n' | b'\r' => {
                if self.buffer.is_empty() {
                    Ok(None)
                } else {
                    let line = Line {
                        bytes: self.buffer.clone(),
                    };
                    self.buffer.clear();
                    Ok(Some(line))
                }
            }
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
        }
    }

    /// Drop any partially accumulated frame
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes currently buffered
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Line, LineAccumulator, LineError, MAX_LINE_LEN};
    use proptest::prelude::*;

    /// Feed a byte slice, collecting emitted lines and overflow events.
    fn feed_all(acc: &mut LineAccumulator, bytes: &[u8]) -> (Vec<Line>, usize) {
        let mut lines = Vec::new();
        let mut overflows = 0;
        for &b in bytes {
            match acc.feed(b) {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => {}
                Err(LineError::Overflow) => overflows += 1,
            }
        }
        (lines, overflows)
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.as_str()).collect()
    }

    #[test]
    fn test_emits_line_on_newline() {
        let mut acc = LineAccumulator::new();
        let (lines, overflows) = feed_all(&mut acc, b"CPU:45.2\n");
        assert_eq!(overflows, 0);
        assert_eq!(texts(&lines), ["CPU:45.2"]);
    }

    #[test]
    fn test_terminator_is_excluded() {
        let mut acc = LineAccumulator::new();
        let line = acc.feed(b'a').unwrap();
        assert!(line.is_none());
        let line = acc.feed(b'\n').unwrap().unwrap();
        assert_eq!(line.as_bytes(), b"a");
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn test_crlf_emits_single_line() {
        let mut acc = LineAccumulator::new();
        let (lines, _) = feed_all(&mut acc, b"abc\r\ndef\r\n");
        assert_eq!(texts(&lines), ["abc", "def"]);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let mut acc = LineAccumulator::new();
        let (lines, overflows) = feed_all(&mut acc, b"\n\r\n\r");
        assert!(lines.is_empty());
        assert_eq!(overflows, 0);
    }

    #[test]
    fn test_longest_frame_fits() {
        let mut acc = LineAccumulator::new();
        let frame = [b'x'; MAX_LINE_LEN];
        let (lines, overflows) = feed_all(&mut acc, &frame);
        assert!(lines.is_empty());
        assert_eq!(overflows, 0);

        let line = acc.feed(b'\n').unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_overflow_discards_and_restarts() {
        let mut acc = LineAccumulator::new();
        let frame = [b'x'; MAX_LINE_LEN + 1];
        let (lines, overflows) = feed_all(&mut acc, &frame);
        assert!(lines.is_empty());
        assert_eq!(overflows, 1);
        assert_eq!(acc.pending(), 0);

        // Accumulation works again after the overflow
        let (lines, overflows) = feed_all(&mut acc, b"ok\n");
        assert_eq!(overflows, 0);
        assert_eq!(texts(&lines), ["ok"]);
    }

    #[test]
    fn test_reset_drops_partial_frame() {
        let mut acc = LineAccumulator::new();
        let _ = feed_all(&mut acc, b"partial");
        assert_eq!(acc.pending(), 7);
        acc.reset();
        let (lines, _) = feed_all(&mut acc, b"\n");
        assert!(lines.is_empty());
    }

    fn line_strategy() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            any::<u8>().prop_filter("no terminators", |b| *b != b'\n' && *b != b'\r'),
            1..=MAX_LINE_LEN,
        )
    }

    proptest! {
        /// Any set of well-formed lines round-trips through the accumulator.
        #[test]
        fn prop_lines_roundtrip(input in proptest::collection::vec(line_strategy(), 0..6)) {
            let mut stream = Vec::new();
            for line in &input {
                stream.extend_from_slice(line);
                stream.push(b'\n');
            }

            let mut acc = LineAccumulator::new();
            let (lines, overflows) = feed_all(&mut acc, &stream);
            prop_assert_eq!(overflows, 0);
            prop_assert_eq!(lines.len(), input.len());
            for (line, expected) in lines.iter().zip(&input) {
                prop_assert_eq!(line.as_bytes(), expected.as_slice());
            }
        }

        /// Chunk boundaries never change what is emitted: a stream fed as
        /// two arbitrary slices matches the same stream fed whole.
        #[test]
        fn prop_chunk_boundary_independence(
            data in proptest::collection::vec(any::<u8>(), 0..512),
            split in 0usize..512,
        ) {
            let split = split.min(data.len());

            let mut whole = LineAccumulator::new();
            let whole_result = feed_all(&mut whole, &data);

            let mut chunked = LineAccumulator::new();
            let (mut lines, mut overflows) = feed_all(&mut chunked, &data[..split]);
            let (tail_lines, tail_overflows) = feed_all(&mut chunked, &data[split..]);
            lines.extend(tail_lines);
            overflows += tail_overflows;

            prop_assert_eq!(whole_result, (lines, overflows));
        }
    }
}
