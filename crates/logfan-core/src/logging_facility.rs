//! Diagnostics of the logging facility itself
//!
//! The logger reports its own lifecycle (start, stop, tree builds) through
//! `tracing`, never through a [`Logger`](crate::Logger), so diagnostics can
//! not recurse into the sinks they describe.
//!
//! - `init(profile)` installs a host subscriber once
//! - `log_op_start!`, `log_op_end!`, `log_op_error!` emit the structured events
//! - `init_test_capture()` collects events in memory for assertions
//!
//! ```rust
//! use logfan_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
