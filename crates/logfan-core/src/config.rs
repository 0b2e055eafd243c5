//! Logger configuration loaded from TOML
//!
//! ```toml
//! level = "debug"
//! console = true
//! file = "app.log"
//! profiler = false
//! engine = false
//! ```
//!
//! Every key is optional. `LOGFAN_LEVEL` and `LOGFAN_FILE` override the
//! file's values when [`LoggerConfig::apply_env_overrides`] is called.

use logfan_core_types::Severity;
use logfan_errors::{LogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_LEVEL: &str = "LOGFAN_LEVEL";
pub const ENV_FILE: &str = "LOGFAN_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: Severity,
    pub console: bool,
    pub file: Option<PathBuf>,
    pub profiler: bool,
    pub engine: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            console: true,
            file: None,
            profiler: false,
            engine: false,
        }
    }
}

impl LoggerConfig {
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] for malformed TOML, unknown keys
    /// or an unknown level name.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LogError::invalid_config(e.to_string()))
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| LogError::io("read config", e))?;
        Self::from_toml_str(&content)
    }

    /// Apply `LOGFAN_LEVEL` / `LOGFAN_FILE` from the process environment.
    ///
    /// # Errors
    ///
    /// See [`apply_env_overrides_with`](Self::apply_env_overrides_with).
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`.
    ///
    /// An empty `LOGFAN_FILE` clears the configured file.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if `LOGFAN_LEVEL` is not a level
    /// name; nothing is changed in that case.
    pub fn apply_env_overrides_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = match lookup(ENV_LEVEL) {
            Some(raw) => Some(raw.parse::<Severity>().map_err(|e| {
                LogError::invalid_config(format!("{ENV_LEVEL}: {e}"))
            })?),
            None => None,
        };

        if let Some(level) = level {
            self.level = level;
        }
        if let Some(file) = lookup(ENV_FILE) {
            self.file = (!file.is_empty()).then(|| PathBuf::from(file));
        }
        Ok(())
    }
}
