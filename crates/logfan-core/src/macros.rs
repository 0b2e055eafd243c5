//! Emit macros
//!
//! Each macro captures the call site with `file!()` / `line!()` and formats
//! lazily through `format_args!`, so filtered-out messages cost no
//! allocation. The first argument is anything with a
//! `log(severity, file, line, args)` method: a [`Logger`](crate::Logger),
//! a [`SharedLogger`](crate::SharedLogger) or [`Global`](crate::global::Global).
//!
//! ```
//! use logfan_core::{log_debug, log_info, Logger, Severity};
//!
//! let mut logger = Logger::new();
//! logger.start(Severity::Trace).unwrap();
//! log_info!(logger, "Hello from logger!");
//! log_debug!(logger, "Debug value: {}", 42);
//! logger.destroy().unwrap();
//! ```

/// Emit at an explicit severity.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, file!(), line!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
