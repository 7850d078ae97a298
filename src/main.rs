mod cli;
mod config;
mod db;
mod error;
mod reset;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agf-cleanup", version, about = "Maintenance CLI for the AGF Petrol databases")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Clear both databases, preserving the catalog tables and admin accounts
    Reset,
    /// Create both databases with schema and seed data
    Setup,
    /// Show per-table row counts for both databases
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for database paths and log level)
    let config = config::CleanupConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for the cleanup dialogue.
    let filter = EnvFilter::try_new(&config.log.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // A bare invocation runs the reset flow.
    match cli.command.unwrap_or(Command::Reset) {
        Command::Reset => cli::reset::reset(&config)?,
        Command::Setup => cli::setup::setup(&config)?,
        Command::Stats => cli::stats::stats(&config)?,
    }

    Ok(())
}
