//! Error facility for logfan
//!
//! Every configuration and lifecycle call returns a [`Result`] whose error
//! carries one of a small, stable set of status kinds. Callers that need to
//! branch programmatically use [`LogError::kind`] or [`LogError::code`];
//! callers that only report use the `Display` impl.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

// ========== Status Taxonomy ==========

/// Canonical status kind taxonomy
///
/// Each kind maps to a stable code usable in tests and by external callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogErrorKind {
    /// The logger handle does not exist (not installed / already destroyed)
    HandleMissing,
    /// A file path was empty
    InvalidPath,
    /// File output is already open
    FileAlreadyOpen,
    /// Growing an owned collection failed
    OutOfMemory,
    /// The log file could not be opened
    UnableToOpenFile,
    /// Anything else
    UnknownError,
}

impl LogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LogErrorKind::HandleMissing => "ERR_HANDLE_MISSING",
            LogErrorKind::InvalidPath => "ERR_INVALID_PATH",
            LogErrorKind::FileAlreadyOpen => "ERR_FILE_ALREADY_OPEN",
            LogErrorKind::OutOfMemory => "ERR_OUT_OF_MEMORY",
            LogErrorKind::UnableToOpenFile => "ERR_UNABLE_TO_OPEN_FILE",
            LogErrorKind::UnknownError => "ERR_UNKNOWN",
        }
    }
}

impl std::fmt::Display for LogErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ========== Errors ==========

/// Error taxonomy for logfan operations
#[derive(Error, Debug)]
pub enum LogError {
    /// No logger is installed in the requested slot
    #[error("Logger handle does not exist")]
    HandleMissing,

    /// An empty path was supplied for file output
    #[error("Invalid log file path: path must be non-empty")]
    InvalidPath,

    /// A file sink is already holding the path open
    #[error("Log file is already open: {}", path.display())]
    FileAlreadyOpen { path: PathBuf },

    /// Fallible reservation failed while growing a sink collection
    #[error("Out of memory while {context}")]
    OutOfMemory { context: &'static str },

    /// Opening the log file failed
    #[error("Unable to open log file {}: {source}", path.display())]
    UnableToOpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Start was requested but no sink is enabled
    #[error("No sinks enabled: enable console, file, profiler or engine output")]
    NoSinksEnabled,

    /// The process-wide logger slot is already occupied
    #[error("A global logger is already installed")]
    AlreadyInstalled,

    /// An engine sink was requested with neither console nor file output
    #[error("Engine sink needs console or file output")]
    EngineNoOutputs,

    /// An I/O operation on an open sink failed
    #[error("I/O error during {op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A logger mutex was poisoned by a panicking holder
    #[error("Logger lock poisoned")]
    Poisoned,

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl LogError {
    /// Classify this error into the stable status taxonomy
    pub fn kind(&self) -> LogErrorKind {
        match self {
            LogError::HandleMissing => LogErrorKind::HandleMissing,
            LogError::InvalidPath => LogErrorKind::InvalidPath,
            LogError::FileAlreadyOpen { .. } => LogErrorKind::FileAlreadyOpen,
            LogError::OutOfMemory { .. } => LogErrorKind::OutOfMemory,
            LogError::UnableToOpenFile { .. } => LogErrorKind::UnableToOpenFile,
            LogError::NoSinksEnabled
            | LogError::AlreadyInstalled
            | LogError::EngineNoOutputs
            | LogError::Io { .. }
            | LogError::Poisoned
            | LogError::InvalidConfig { .. } => LogErrorKind::UnknownError,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Create an I/O error tagged with the failing operation
    pub fn io(op: &'static str, source: std::io::Error) -> Self {
        LogError::Io { op, source }
    }

    /// Create a configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        LogError::InvalidConfig {
            message: message.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for LogError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        LogError::Poisoned
    }
}
