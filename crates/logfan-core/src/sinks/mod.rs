//! Concrete sink variants

pub mod composite;
pub mod console;
pub mod engine;
pub mod file;
pub mod profiler;

pub use composite::{AddError, CompositeSink};
pub use console::ConsoleSink;
pub use engine::EngineSink;
pub use file::FileSink;
pub use profiler::ProfilerSink;
