//! Profiler integration sink
//!
//! With the `profiler` feature compiled in, each record's text is forwarded
//! as a `tracing` event on target `logfan::profiler` through the host's
//! global subscriber, where a profiler layer (Tracy, Superluminal, ...) can
//! pick it up as a message marker. Without the feature, emit is a no-op.

use crate::record::Record;
use crate::sink::Sink;
use logfan_core_types::SinkKind;
use logfan_errors::Result;

pub struct ProfilerSink {
    enabled: bool,
}

impl ProfilerSink {
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    pub fn with_enabled(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether emitted records actually reach a profiler.
    pub fn is_active(&self) -> bool {
        self.enabled && cfg!(feature = "profiler")
    }
}

impl Default for ProfilerSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ProfilerSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Profiler
    }

    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    fn emit(&mut self, record: &Record<'_>) {
        if !self.enabled {
            return;
        }

        #[cfg(feature = "profiler")]
        tracing::info!(
            target: logfan_core_types::schema::TARGET_PROFILER,
            severity = record.severity.as_str(),
            "{}",
            record.text
        );

        #[cfg(not(feature = "profiler"))]
        let _ = record;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logfan_core_types::Severity;

    #[test]
    fn test_profiler_sink_lifecycle_is_infallible() {
        let mut sink = ProfilerSink::new();
        sink.start().unwrap();
        sink.emit(&Record::new(Severity::Info, "p.rs", 1, "frame"));
        sink.stop().unwrap();
        sink.stop().unwrap();
        Box::new(sink).destroy();
    }

    #[test]
    fn test_active_only_with_feature() {
        assert_eq!(ProfilerSink::new().is_active(), cfg!(feature = "profiler"));
        assert!(!ProfilerSink::with_enabled(false).is_active());
        assert_eq!(ProfilerSink::new().kind(), SinkKind::Profiler);
    }
}
