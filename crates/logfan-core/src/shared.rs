//! Mutex-guarded logger handle for concurrent use

use crate::logger::Logger;
use logfan_core_types::Severity;
use logfan_errors::{LogError, Result};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle that serializes every operation on one [`Logger`]
/// behind a single lock.
#[derive(Clone)]
pub struct SharedLogger {
    inner: Arc<Mutex<Logger>>,
}

impl SharedLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    /// # Errors
    ///
    /// Returns [`LogError::Poisoned`] if a thread panicked while holding
    /// the lock.
    pub fn lock(&self) -> Result<MutexGuard<'_, Logger>> {
        self.inner.lock().map_err(|_| LogError::Poisoned)
    }

    /// Run `f` with exclusive access to the logger.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Poisoned`] if the lock is poisoned.
    pub fn with<R>(&self, f: impl FnOnce(&mut Logger) -> R) -> Result<R> {
        let mut logger = self.lock()?;
        Ok(f(&mut logger))
    }

    /// # Errors
    ///
    /// See [`Logger::start`].
    pub fn start(&self, level: Severity) -> Result<()> {
        self.lock()?.start(level)
    }

    /// # Errors
    ///
    /// See [`Logger::stop`].
    pub fn stop(&self) -> Result<()> {
        self.lock()?.stop()
    }

    /// # Errors
    ///
    /// Returns [`LogError::Poisoned`] if the lock is poisoned.
    pub fn set_level(&self, level: Severity) -> Result<()> {
        self.lock()?.set_level(level);
        Ok(())
    }

    /// Emit through the guarded logger. Dropped silently if the lock is
    /// poisoned.
    pub fn log(&self, severity: Severity, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if let Ok(mut logger) = self.inner.lock() {
            logger.log(severity, file, line, args);
        }
    }

    /// Destroy the logger if this is the last handle, otherwise only stop it.
    ///
    /// Works on a poisoned lock too, so the sinks are always released.
    ///
    /// # Errors
    ///
    /// Returns the stop error of the running tree.
    pub fn destroy(self) -> Result<()> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner)
                .destroy(),
            Err(inner) => inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .stop(),
        }
    }
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_threads_share_one_logger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.log");

        let mut logger = Logger::new();
        logger.disable_console();
        logger.enable_file_output(&path).unwrap();
        let shared = SharedLogger::new(logger);
        shared.start(Severity::Info).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..10 {
                        shared.log(Severity::Info, "t.rs", 1, format_args!("t{n}-{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        shared.destroy().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 40);
        assert!(contents
            .lines()
            .all(|l| l.starts_with("[INFO] t.rs:1 | t")));
    }

    #[test]
    fn test_destroy_with_other_handles_only_stops() {
        let shared = SharedLogger::from(Logger::new());
        shared.start(Severity::Info).unwrap();
        let other = shared.clone();

        shared.destroy().unwrap();
        assert!(!other.with(|l| l.is_started()).unwrap());
        other.destroy().unwrap();
    }

    #[test]
    fn test_destroy_releases_poisoned_logger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poisoned.log");

        let mut logger = Logger::new();
        logger.disable_console();
        logger.enable_file_output(&path).unwrap();
        let shared = SharedLogger::new(logger);
        shared.start(Severity::Info).unwrap();
        shared.log(Severity::Info, "p.rs", 1, format_args!("before"));

        let other = shared.clone();
        let panicked = thread::spawn(move || {
            other.with(|_| panic!("closure failed")).ok();
        })
        .join();
        assert!(panicked.is_err());
        assert!(matches!(shared.lock().err(), Some(LogError::Poisoned)));

        shared.destroy().unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "[INFO] p.rs:1 | before\n");
    }

    #[test]
    fn test_set_level_through_handle() {
        let shared = SharedLogger::new(Logger::new());
        shared.set_level(Severity::Debug).unwrap();
        assert_eq!(shared.with(|l| l.level()).unwrap(), Severity::Debug);
    }
}
