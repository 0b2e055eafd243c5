//! Console sink: standard output, with errors routed to standard error

use crate::record::Record;
use crate::sink::Sink;
use logfan_core_types::SinkKind;
use logfan_errors::{LogError, Result};
use std::io::{self, Write};

/// Writes `[LEVEL] file:line | message` lines to the console.
///
/// Records at `ERROR` and above go to the error stream, everything else to
/// the standard stream.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl ConsoleSink {
    /// Console sink bound to the process's stdout and stderr.
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Console sink writing to arbitrary streams (used by tests and embedders).
    pub fn with_writers(
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.out
            .flush()
            .and_then(|_| self.err.flush())
            .map_err(|e| LogError::io("console flush", e))
    }

    fn emit(&mut self, record: &Record<'_>) {
        let stream = if record.severity.is_error_stream() {
            &mut self.err
        } else {
            &mut self.out
        };
        let _ = writeln!(stream, "{record}");
    }
}
