//! The logger handle: configuration, level filtering and sink lifecycle
//!
//! A [`Logger`] only records flags until [`Logger::start`] assembles a
//! [`CompositeSink`] from them. Every start rebuilds the tree from scratch,
//! so configuration changes take effect at the next start.

use crate::config::LoggerConfig;
use crate::record::{format_bounded, Record};
use crate::sink::Sink;
use crate::sinks::{CompositeSink, ConsoleSink, EngineSink, FileSink, ProfilerSink};
use crate::{log_op_end, log_op_error, log_op_start};
use logfan_core_types::{Severity, SinkKind};
use logfan_errors::{LogError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Severity-filtering front end over a tree of sinks.
///
/// Not synchronized: every operation takes `&mut self`. Wrap it in a
/// [`SharedLogger`](crate::SharedLogger) or install it in the
/// [`global`](crate::global) slot to share it between threads.
pub struct Logger {
    level: Severity,
    started: bool,
    console: bool,
    file: bool,
    file_path: Option<PathBuf>,
    profiler: bool,
    engine: bool,
    active: Option<CompositeSink>,
}

impl Logger {
    /// Level INFO, console on, everything else off, not started.
    pub fn new() -> Self {
        Self {
            level: Severity::Info,
            started: false,
            console: true,
            file: false,
            file_path: None,
            profiler: false,
            engine: false,
            active: None,
        }
    }

    /// Build an unstarted logger from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidPath`] if the configured file path is empty.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let mut logger = Self::new();
        logger.set_level(config.level);
        logger.console = config.console;
        logger.profiler = config.profiler;
        logger.engine = config.engine;
        if let Some(path) = &config.file {
            logger.enable_file_output(path)?;
        }
        Ok(logger)
    }

    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Remember `path` as the file output and turn file output on.
    ///
    /// The file is not opened until the next [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidPath`] for an empty path; the previously
    /// configured path and flag are left untouched.
    pub fn enable_file_output(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            let err = LogError::InvalidPath;
            log_op_error!("enable_file_output", err, duration_ms = 0u64);
            return Err(err);
        }
        self.file_path = Some(path.to_path_buf());
        self.file = true;
        Ok(())
    }

    /// Turn file output off. The path is kept for a later re-enable.
    pub fn disable_file_output(&mut self) {
        self.file = false;
    }

    pub fn enable_console(&mut self) {
        self.console = true;
    }

    pub fn disable_console(&mut self) {
        self.console = false;
    }

    pub fn enable_profiler(&mut self) {
        self.profiler = true;
    }

    pub fn disable_profiler(&mut self) {
        self.profiler = false;
    }

    /// Route console and file output through the async engine instead of
    /// the plain sinks.
    pub fn enable_engine(&mut self) {
        self.engine = true;
    }

    pub fn disable_engine(&mut self) {
        self.engine = false;
    }

    /// Set `level`, tear down any running tree, then build and start a new
    /// one from the current flags.
    ///
    /// On failure the partial tree is destroyed and the logger is left
    /// stopped with no tree.
    ///
    /// # Errors
    ///
    /// - [`LogError::NoSinksEnabled`] when no output is enabled
    /// - [`LogError::EngineNoOutputs`] when the engine has neither console
    ///   nor file to write to
    /// - any error from opening or starting a sink
    pub fn start(&mut self, level: Severity) -> Result<()> {
        let started_at = Instant::now();
        log_op_start!("start", level = level.as_str());

        self.level = level;
        if let Err(err) = self.teardown() {
            log_op_error!("teardown", err, duration_ms = elapsed_ms(started_at));
        }

        let result = self.build_tree().and_then(|mut tree| match tree.start() {
            Ok(()) => Ok(tree),
            Err(err) => {
                Box::new(tree).destroy();
                Err(err)
            }
        });

        match result {
            Ok(tree) => {
                let sink_count = tree.len();
                self.active = Some(tree);
                self.started = true;
                log_op_end!(
                    "start",
                    duration_ms = elapsed_ms(started_at),
                    sink_count = sink_count
                );
                Ok(())
            }
            Err(err) => {
                log_op_error!("start", err, duration_ms = elapsed_ms(started_at));
                Err(err)
            }
        }
    }

    /// Stop and destroy the running tree.
    ///
    /// The logger is stopped and the tree is gone even when a sink fails
    /// to stop. Stopping an unstarted logger is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by a sink's `stop`.
    pub fn stop(&mut self) -> Result<()> {
        let started_at = Instant::now();
        log_op_start!("stop");

        let result = self.teardown();
        match &result {
            Ok(()) => {
                log_op_end!("stop", duration_ms = elapsed_ms(started_at));
            }
            Err(err) => {
                log_op_error!("stop", err, duration_ms = elapsed_ms(started_at));
            }
        }
        result
    }

    /// Stop the logger if needed and release everything it owns.
    ///
    /// Safe on a logger that was never started.
    ///
    /// # Errors
    ///
    /// Returns the stop error of the running tree, if any; the logger is
    /// released either way.
    pub fn destroy(mut self) -> Result<()> {
        let started_at = Instant::now();
        log_op_start!("destroy", started = self.started);

        let result = self.teardown();
        match &result {
            Ok(()) => {
                log_op_end!("destroy", duration_ms = elapsed_ms(started_at));
            }
            Err(err) => {
                log_op_error!("destroy", err, duration_ms = elapsed_ms(started_at));
            }
        }
        result
    }

    /// Forward one message to the sinks if the logger is started and
    /// `severity` is at or above the level.
    ///
    /// The text is truncated to [`MESSAGE_CAPACITY`](crate::MESSAGE_CAPACITY)
    /// bytes. Usually called through `log_info!` and friends.
    pub fn log(&mut self, severity: Severity, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if !self.is_enabled(severity) {
            return;
        }
        let Some(tree) = self.active.as_mut() else {
            return;
        };
        let text = format_bounded(args);
        tree.emit(&Record::new(severity, file, line, &text));
    }

    /// Whether a message at `severity` would currently be emitted.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.started && severity >= self.level
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_console_enabled(&self) -> bool {
        self.console
    }

    pub fn is_file_enabled(&self) -> bool {
        self.file
    }

    pub fn is_profiler_enabled(&self) -> bool {
        self.profiler
    }

    pub fn is_engine_enabled(&self) -> bool {
        self.engine
    }

    /// Kinds of the sinks in the running tree, in fan-out order.
    pub fn active_sink_kinds(&self) -> Vec<SinkKind> {
        self.active
            .as_ref()
            .map(CompositeSink::kinds)
            .unwrap_or_default()
    }

    fn enabled_file_path(&self) -> Option<&Path> {
        self.file_path
            .as_deref()
            .filter(|path| self.file && !path.as_os_str().is_empty())
    }

    fn build_tree(&self) -> Result<CompositeSink> {
        let mut tree = CompositeSink::new();
        match self.populate(&mut tree) {
            Ok(()) if tree.is_empty() => Err(LogError::NoSinksEnabled),
            Ok(()) => Ok(tree),
            Err(err) => {
                Box::new(tree).destroy();
                Err(err)
            }
        }
    }

    fn populate(&self, tree: &mut CompositeSink) -> Result<()> {
        if self.engine {
            let engine = EngineSink::new(self.enabled_file_path(), self.console)?;
            tree.add(Box::new(engine))?;
        } else {
            if self.console {
                tree.add(Box::new(ConsoleSink::new()))?;
            }
            if let Some(path) = self.enabled_file_path() {
                tree.add(Box::new(FileSink::open(path)?))?;
            }
        }
        if self.profiler {
            tree.add(Box::new(ProfilerSink::new()))?;
        }
        Ok(())
    }

    fn teardown(&mut self) -> Result<()> {
        self.started = false;
        let Some(mut tree) = self.active.take() else {
            return Ok(());
        };
        let result = tree.stop();
        Box::new(tree).destroy();
        result
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("started", &self.started)
            .field("console", &self.console)
            .field("file", &self.file)
            .field("file_path", &self.file_path)
            .field("profiler", &self.profiler)
            .field("engine", &self.engine)
            .field("active", &self.active_sink_kinds())
            .finish()
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let logger = Logger::new();
        assert_eq!(logger.level(), Severity::Info);
        assert!(!logger.is_started());
        assert!(logger.is_console_enabled());
        assert!(!logger.is_file_enabled());
        assert!(!logger.is_profiler_enabled());
        assert!(!logger.is_engine_enabled());
        assert_eq!(logger.file_path(), None);
        assert!(logger.active_sink_kinds().is_empty());
    }

    #[test]
    fn test_unstarted_logger_is_disabled_at_every_level() {
        let logger = Logger::new();
        for severity in Severity::ALL {
            assert!(!logger.is_enabled(severity));
        }
    }

    #[test]
    fn test_console_and_profiler_tree() {
        let mut logger = Logger::new();
        logger.enable_profiler();
        logger.start(Severity::Warn).unwrap();

        assert!(logger.is_started());
        assert_eq!(logger.level(), Severity::Warn);
        assert_eq!(
            logger.active_sink_kinds(),
            vec![SinkKind::Console, SinkKind::Profiler]
        );
        assert!(logger.is_enabled(Severity::Error));
        assert!(!logger.is_enabled(Severity::Info));

        logger.stop().unwrap();
        assert!(!logger.is_started());
        assert!(logger.active_sink_kinds().is_empty());
    }

    #[test]
    fn test_disabled_file_with_remembered_path_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = Logger::new();
        logger.enable_file_output(dir.path().join("a.log")).unwrap();
        logger.disable_file_output();

        logger.start(Severity::Info).unwrap();
        assert_eq!(logger.active_sink_kinds(), vec![SinkKind::Console]);
        assert!(logger.file_path().is_some());
    }

    #[test]
    fn test_engine_replaces_plain_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = Logger::new();
        logger.enable_file_output(dir.path().join("engine.log")).unwrap();
        logger.enable_engine();
        logger.enable_profiler();

        logger.start(Severity::Info).unwrap();
        assert_eq!(
            logger.active_sink_kinds(),
            vec![SinkKind::Engine, SinkKind::Profiler]
        );
        logger.destroy().unwrap();
    }

    #[test]
    fn test_engine_without_outputs_fails_start() {
        let mut logger = Logger::new();
        logger.disable_console();
        logger.enable_engine();

        let err = logger.start(Severity::Info).unwrap_err();
        assert!(matches!(err, LogError::EngineNoOutputs));
        assert!(!logger.is_started());
    }

    #[test]
    fn test_debug_lists_active_kinds() {
        let mut logger = Logger::new();
        logger.start(Severity::Info).unwrap();
        let rendered = format!("{logger:?}");
        assert!(rendered.contains("Console"));
    }
}
