//! ## otelcol-cli
//! **Collector command-line interface**
//!
//! Registers the telemetry flags, resolves them against the configuration
//! file and environment, and reports the validated settings.

use clap::Parser;
use otelcol_telemetry::EventLogger;

mod commands;

use commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    EventLogger::init(&cli.log_level)?;

    let output = commands::run_command(&cli)?;
    print!("{output}");
    Ok(())
}
