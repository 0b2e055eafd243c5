//! Structured diagnostic macros
//!
//! All three emit at DEBUG: these are the facility's own diagnostics and
//! stay quiet under the default `logfan=info` directive.
//!
//! Field keys are the `schema::FIELD_*` names; `tracing` needs them spelled
//! out as identifiers here, and the capture tests hold the two together.

/// Log the start of an operation
///
/// ```
/// # use logfan_core::log_op_start;
/// log_op_start!("start");
/// log_op_start!("start", level = "debug");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use logfan_core::log_op_end;
/// log_op_end!("stop", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation with its error kind and stable code
///
/// ```
/// # use logfan_core::{log_op_error, LogError};
/// let err = LogError::InvalidPath;
/// log_op_error!("enable_file_output", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::LogError = &$err;
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: &$crate::LogError = &$err;
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
            $($field)*
        );
    }};
}
