//! Message records and bounded formatting
//!
//! A [`Record`] is a borrowed view of one message handed to every sink's
//! `emit`. Sinks must copy what they keep; the text buffer does not outlive
//! the call.

use logfan_core_types::Severity;
use std::fmt::{self, Write as _};

/// Maximum number of bytes of formatted message text forwarded to sinks.
///
/// Longer messages are truncated on a UTF-8 character boundary.
pub const MESSAGE_CAPACITY: usize = 2048;

/// One formatted message on its way to the sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub severity: Severity,
    pub file: &'a str,
    pub line: u32,
    pub text: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(severity: Severity, file: &'a str, line: u32, text: &'a str) -> Self {
        Self {
            severity,
            file,
            line,
            text,
        }
    }
}

/// Renders the canonical text line `[LEVEL] file:line | message` (no newline).
impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}:{} | {}",
            self.severity.as_str(),
            self.file,
            self.line,
            self.text
        )
    }
}

/// Format `args` into a string of at most [`MESSAGE_CAPACITY`] bytes.
pub fn format_bounded(args: fmt::Arguments<'_>) -> String {
    format_bounded_to(args, MESSAGE_CAPACITY)
}

/// Format `args` into a string of at most `capacity` bytes.
///
/// Formatting stops consuming input once the buffer is full, so oversized
/// arguments are never rendered in full.
pub fn format_bounded_to(args: fmt::Arguments<'_>, capacity: usize) -> String {
    // Fast path for plain literals
    if let Some(s) = args.as_str() {
        return truncate_to_boundary(s, capacity).to_string();
    }

    let mut buf = BoundedBuf {
        buf: String::with_capacity(capacity.min(256)),
        capacity,
    };
    // The buffer never reports an error; only a broken Display impl can.
    let _ = buf.write_fmt(args);
    buf.buf
}

fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

struct BoundedBuf {
    buf: String,
    capacity: usize,
}

impl fmt::Write for BoundedBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.capacity - self.buf.len();
        if remaining == 0 {
            return Ok(());
        }
        self.buf.push_str(truncate_to_boundary(s, remaining));
        Ok(())
    }
}
