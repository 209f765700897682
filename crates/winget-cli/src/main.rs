//! wingetgen CLI
//!
//! Builds winget manifests from recipe files and writes them only when
//! their content changed.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sync {
            recipe,
            dry_run,
            json,
        } => commands::run_sync(&recipe, dry_run, json),
        Commands::Render { recipe, json } => commands::run_render(&recipe, json),
        Commands::Digest { files } => commands::run_digest(&files),
    }
}
