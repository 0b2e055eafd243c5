//! Emit command
//!
//! Usage: logfan emit <LEVEL> <MESSAGE> [--file <PATH>] [--no-console]
//!        [--profiler] [--engine] [--config <PATH>] [--min-level <LEVEL>]

use clap::Args;
use logfan_core::{log_at, Logger, LoggerConfig, Severity};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity of the message (trace, debug, info, warn, error, fatal)
    pub level: Severity,

    /// Message text
    pub message: String,

    /// Also append to this file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Do not write to the console
    #[arg(long)]
    pub no_console: bool,

    /// Add the profiler sink
    #[arg(long)]
    pub profiler: bool,

    /// Route console and file output through the async engine
    #[arg(long)]
    pub engine: bool,

    /// TOML configuration file; flags given here take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum severity that is emitted
    #[arg(long)]
    pub min_level: Option<Severity>,
}

impl EmitArgs {
    /// Configuration file, then `LOGFAN_*` environment, then flags.
    fn resolve_config(&self) -> Result<LoggerConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::load(path)?,
            None => LoggerConfig::default(),
        };
        config.apply_env_overrides()?;

        if let Some(file) = &self.file {
            config.file = Some(file.clone());
        }
        if self.no_console {
            config.console = false;
        }
        config.profiler |= self.profiler;
        config.engine |= self.engine;
        if let Some(level) = self.min_level {
            config.level = level;
        }
        Ok(config)
    }
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve_config()?;

    let mut logger = Logger::from_config(&config)?;
    logger.start(config.level)?;
    log_at!(logger, args.level, "{}", args.message);
    logger.destroy()?;

    Ok(())
}
