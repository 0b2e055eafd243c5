//! Core types shared across logfan facilities
//!
//! This crate provides foundational types used by the error taxonomy,
//! the sink implementations and the logger itself:
//!
//! - **Severity**: the ordered log level enumeration
//! - **Sink kinds**: identifiers for every sink variant
//! - **Schema constants**: canonical field keys and event names for diagnostics

pub mod schema;
pub mod severity;
pub mod sink_kind;

pub use severity::{ParseSeverityError, Severity};
pub use sink_kind::SinkKind;
