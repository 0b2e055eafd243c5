//! Demo command
//!
//! Usage: logfan demo [--file <PATH>]

use clap::Args;
use logfan_core::{log_debug, log_info, Logger, Severity};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Also append the demo output to this file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Execute demo command
pub fn execute(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = Logger::new();
    if let Some(path) = &args.file {
        logger.enable_file_output(path)?;
    }

    logger.start(Severity::Trace)?;
    log_info!(logger, "Hello from logger!");
    log_debug!(logger, "Debug value: {}", 42);
    logger.stop()?;
    logger.destroy()?;

    Ok(())
}
