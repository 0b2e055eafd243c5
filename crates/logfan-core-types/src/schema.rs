//! Canonical schema constants for diagnostic events
//!
//! These constants keep the facility's own `tracing` diagnostics consistent.

// Canonical field keys for structured diagnostics
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_SINK_COUNT: &str = "sink_count";
pub const FIELD_LEVEL: &str = "level";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Targets
pub const TARGET_PROFILER: &str = "logfan::profiler";
pub const TARGET_ENGINE: &str = "logfan::engine";
