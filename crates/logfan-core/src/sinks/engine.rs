//! Third-party asynchronous engine sink
//!
//! The engine is `tracing-subscriber` formatting on top of
//! `tracing-appender` non-blocking writers. Two parts have different scopes:
//!
//! - The engine setup is process-wide and happens at most once, the first
//!   time any engine sink is created.
//! - Each [`EngineSink`] owns a private [`Dispatch`] (so sinks with different
//!   files never see each other's records) plus one background worker per
//!   output. Stopping the sink drops the workers' guards, which drains and
//!   flushes everything still queued.

use crate::record::Record;
use crate::sink::Sink;
use logfan_core_types::schema::TARGET_ENGINE;
use logfan_core_types::{Severity, SinkKind};
use logfan_errors::{LogError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::Dispatch;
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, Registry};

/// Lines queued per worker before producers block.
pub const BUFFERED_LINES_LIMIT: usize = 16_384;

static ENGINE: OnceLock<AsyncEngine> = OnceLock::new();
static ENGINE_STARTS: AtomicUsize = AtomicUsize::new(0);

/// Process-scoped engine settings shared by every sink.
struct AsyncEngine {
    buffered_lines_limit: usize,
}

impl AsyncEngine {
    fn start() -> Self {
        ENGINE_STARTS.fetch_add(1, Ordering::SeqCst);
        Self {
            buffered_lines_limit: BUFFERED_LINES_LIMIT,
        }
    }

    /// Spawn a worker draining into `out`. Never drops lines.
    fn worker<W: Write + Send + 'static>(&self, out: W) -> (NonBlocking, WorkerGuard) {
        NonBlockingBuilder::default()
            .lossy(false)
            .buffered_lines_limit(self.buffered_lines_limit)
            .finish(out)
    }
}

/// Set the engine up if this is the first use in the process.
fn ensure_engine_started() -> &'static AsyncEngine {
    ENGINE.get_or_init(AsyncEngine::start)
}

/// Whether the process-wide engine has been set up.
pub fn is_engine_started() -> bool {
    ENGINE.get().is_some()
}

/// How many times the process-wide engine has been set up (0 or 1).
pub fn engine_start_count() -> usize {
    ENGINE_STARTS.load(Ordering::SeqCst)
}

/// Sink that hands records to the asynchronous engine.
pub struct EngineSink {
    dispatch: Dispatch,
    guards: Vec<WorkerGuard>,
    file_path: Option<PathBuf>,
    console: bool,
    stopped: bool,
}

impl EngineSink {
    /// Create an engine sink writing to the console, a file, or both.
    ///
    /// Starts the process-wide engine on first use.
    ///
    /// # Errors
    ///
    /// - [`LogError::EngineNoOutputs`] when neither output is requested
    /// - [`LogError::InvalidPath`] for an empty file path
    /// - [`LogError::UnableToOpenFile`] when the file cannot be opened
    pub fn new(file_path: Option<&Path>, console: bool) -> Result<Self> {
        if !console && file_path.is_none() {
            return Err(LogError::EngineNoOutputs);
        }

        let engine = ensure_engine_started();
        let mut guards = Vec::with_capacity(2);

        let console_layer = console.then(|| {
            let (writer, guard) = engine.worker(std::io::stdout());
            guards.push(guard);
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .without_time()
                .with_level(false)
                .with_target(false)
        });

        let file_layer = match file_path {
            Some(path) => {
                if path.as_os_str().is_empty() {
                    return Err(LogError::InvalidPath);
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LogError::UnableToOpenFile {
                        path: path.to_path_buf(),
                        source,
                    })?;
                let (writer, guard) = engine.worker(file);
                guards.push(guard);
                Some(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .without_time()
                        .with_level(false)
                        .with_target(false),
                )
            }
            None => None,
        };

        let subscriber = Registry::default().with(console_layer).with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            guards,
            file_path: file_path.map(Path::to_path_buf),
            console,
            stopped: false,
        })
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn has_console(&self) -> bool {
        self.console
    }
}

impl Sink for EngineSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Engine
    }

    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.stopped = true;
        // Dropping a guard blocks until its worker has drained.
        self.guards.clear();
        Ok(())
    }

    fn emit(&mut self, record: &Record<'_>) {
        if self.stopped {
            return;
        }

        let line = record.to_string();
        tracing::dispatcher::with_default(&self.dispatch, || match record.severity {
            Severity::Trace => tracing::trace!(target: TARGET_ENGINE, "{}", line),
            Severity::Debug => tracing::debug!(target: TARGET_ENGINE, "{}", line),
            Severity::Info => tracing::info!(target: TARGET_ENGINE, "{}", line),
            Severity::Warn => tracing::warn!(target: TARGET_ENGINE, "{}", line),
            Severity::Error | Severity::Fatal => {
                tracing::error!(target: TARGET_ENGINE, "{}", line)
            }
        });
    }
}
