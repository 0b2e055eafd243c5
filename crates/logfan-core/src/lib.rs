//! logfan Core - sink dispatch and logger lifecycle
//!
//! This crate provides the logging facility itself:
//! - A polymorphic [`Sink`] contract (start / stop / emit / destroy)
//! - Console, file, profiler and async-engine sinks
//! - A [`CompositeSink`] that owns and fans out to ordered children
//! - The [`Logger`] handle: configuration flags, level filtering and the
//!   start/stop state machine that rebuilds the sink tree
//! - [`SharedLogger`] and the [`global`] slot for guarded concurrent use
//! - TOML configuration with environment overrides
//!
//! ```no_run
//! use logfan_core::{log_info, Logger, Severity};
//!
//! let mut logger = Logger::new();
//! logger.enable_file_output("app.log").unwrap();
//! logger.start(Severity::Debug).unwrap();
//! log_info!(logger, "listening on {}", 8080);
//! logger.stop().unwrap();
//! logger.destroy().unwrap();
//! ```

pub mod config;
pub mod global;
pub mod logger;
pub mod logging_facility;
pub mod macros;
pub mod record;
pub mod shared;
pub mod sink;
pub mod sinks;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use logfan_core_types::{schema, Severity, SinkKind};
pub use logfan_errors::{LogError, LogErrorKind, Result};
pub use logger::Logger;
pub use record::{Record, MESSAGE_CAPACITY};
pub use shared::SharedLogger;
pub use sink::Sink;
pub use sinks::{AddError, CompositeSink, ConsoleSink, EngineSink, FileSink, ProfilerSink};
