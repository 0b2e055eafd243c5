//! logfan CLI
//!
//! Command-line front end for the logfan logging facility

use clap::{Parser, Subcommand};
use logfan_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "logfan")]
#[command(about = "logfan - leveled logging fanned out to pluggable sinks", long_about = None)]
struct Cli {
    /// Print the facility's own diagnostics to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit one message through a configured logger
    Emit(commands::emit::EmitArgs),
    /// Walk through a start / emit / stop / destroy cycle
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Demo(args) => commands::demo::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
