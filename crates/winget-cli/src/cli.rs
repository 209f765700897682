//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate winget manifests and write them only when they change
#[derive(Parser, Debug)]
#[command(name = "wingetgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the manifest described by a recipe and write it if it changed
    ///
    /// Examples:
    ///   wingetgen sync app.toml            # Create or update the manifest
    ///   wingetgen sync app.toml --dry-run  # Report what would happen
    Sync {
        /// Recipe file (.toml, .yaml, .yml or .json)
        recipe: PathBuf,

        /// Decide the outcome without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output the report and manifest as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical manifest for a recipe without writing it
    Render {
        /// Recipe file (.toml, .yaml, .yml or .json)
        recipe: PathBuf,

        /// Print the JSON dump instead of the canonical YAML
        #[arg(long)]
        json: bool,
    },

    /// Print the SHA-256 of one or more files
    Digest {
        /// Files to hash
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_sync_flags() {
        let cli = Cli::parse_from(["wingetgen", "-v", "sync", "app.toml", "--dry-run"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Sync {
                recipe: PathBuf::from("app.toml"),
                dry_run: true,
                json: false,
            }
        );
    }

    #[test]
    fn digest_requires_a_file() {
        assert!(Cli::try_parse_from(["wingetgen", "digest"]).is_err());
    }
}
