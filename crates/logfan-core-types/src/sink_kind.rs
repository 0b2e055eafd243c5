//! Sink variant identifiers

use std::fmt;

/// The concrete variant behind a sink trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
    Profiler,
    /// Third-party asynchronous engine
    Engine,
    Composite,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::File => "file",
            SinkKind::Profiler => "profiler",
            SinkKind::Engine => "engine",
            SinkKind::Composite => "composite",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
