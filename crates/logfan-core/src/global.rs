//! Process-wide logger slot
//!
//! Opt-in: nothing is installed until [`install`] is called, and a slot
//! that is empty reports [`LogError::HandleMissing`]. Emitting through the
//! slot takes its lock, so an installed logger is safe to use from any
//! thread.
//!
//! ```no_run
//! use logfan_core::global::{self, Global};
//! use logfan_core::{log_warn, Logger, Severity};
//!
//! global::install(Logger::new()).unwrap();
//! global::with(|logger| logger.start(Severity::Info)).unwrap().unwrap();
//! log_warn!(Global, "disk {}% full", 91);
//! global::uninstall().unwrap().destroy().unwrap();
//! ```

use crate::logger::Logger;
use logfan_core_types::Severity;
use logfan_errors::{LogError, Result};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

static GLOBAL: Mutex<Option<Logger>> = Mutex::new(None);

/// Lock the slot, recovering it if a closure passed to [`with`] panicked.
///
/// A logger left behind by a panicking closure is still usable and can
/// still be uninstalled.
fn slot() -> MutexGuard<'static, Option<Logger>> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Put `logger` in the slot.
///
/// # Errors
///
/// Returns [`LogError::AlreadyInstalled`] if the slot is occupied; `logger`
/// is dropped.
pub fn install(logger: Logger) -> Result<()> {
    let mut slot = slot();
    if slot.is_some() {
        return Err(LogError::AlreadyInstalled);
    }
    *slot = Some(logger);
    Ok(())
}

/// Run `f` with exclusive access to the installed logger.
///
/// # Errors
///
/// Returns [`LogError::HandleMissing`] if nothing is installed.
pub fn with<R>(f: impl FnOnce(&mut Logger) -> R) -> Result<R> {
    slot().as_mut().map(f).ok_or(LogError::HandleMissing)
}

/// Take the logger out of the slot, leaving it empty.
///
/// # Errors
///
/// Returns [`LogError::HandleMissing`] if nothing is installed.
pub fn uninstall() -> Result<Logger> {
    slot().take().ok_or(LogError::HandleMissing)
}

pub fn is_installed() -> bool {
    slot().is_some()
}

/// Emit through the installed logger; a no-op when the slot is empty.
pub fn log(severity: Severity, file: &str, line: u32, args: fmt::Arguments<'_>) {
    let _ = with(|logger| logger.log(severity, file, line, args));
}

/// Stand-in receiver so the emit macros can target the global slot:
/// `log_info!(Global, ...)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl Global {
    pub fn log(&self, severity: Severity, file: &str, line: u32, args: fmt::Arguments<'_>) {
        log(severity, file, line, args);
    }
}
