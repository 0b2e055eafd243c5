//! Ordered severity levels
//!
//! Ordering matters: lower ordinals are more verbose. A message passes a
//! filter at level `L` iff `message.severity >= L`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used when a raw ordinal does not name a severity.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Log severity, from most verbose (`Trace`) to most severe (`Fatal`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Severity {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Upper-case label used in the text output format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Ordinal of this severity (`Trace` = 0).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Label for a raw ordinal, `UNKNOWN` when out of range.
    pub fn label_for(raw: u8) -> &'static str {
        Severity::try_from(raw)
            .map(|s| s.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Whether messages at this severity belong on the error stream.
    pub fn is_error_stream(&self) -> bool {
        *self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string or ordinal does not name a severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}

impl TryFrom<u8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(raw: u8) -> Result<Self, ParseSeverityError> {
        Severity::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or_else(|| ParseSeverityError(raw.to_string()))
    }
}
