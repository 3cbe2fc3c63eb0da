//! Host Telemetry Protocol
//!
//! This crate defines the serial protocol between the host PC and the
//! Vigil desk monitor. The host sends one metrics snapshot per line of
//! ASCII text; the monitor parses it into a validated reading.
//!
//! # Wire format
//!
//! One frame per `\n`- or `\r`-terminated line, markers in any order:
//!
//! ```text
//! CPU:<f>,RAM:<f>,TEMP:<f>[,FREQ:<f>][,GPU:<f>][,RAMGB:<f>/<f>]
//!     [,FAN:<i>][,NET:<f>,<f>][,BAT:<i>][,POWER:<f>],CHK:<i>
//! ```
//!
//! `CPU`, `RAM` and `TEMP` are mandatory and range-checked; everything
//! else defaults when absent. The protocol is built to survive a hostile
//! line: partial reads, garbage tokens, and overlong frames are all
//! non-fatal.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod line;
pub mod numeric;
pub mod telemetry;

pub use line::{Line, LineAccumulator, LineError, MAX_LINE_LEN};
pub use telemetry::{ChecksumPolicy, ParseError, RequiredField, TelemetryReading};
