use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI definition. Running without a subcommand performs the full
/// scaffold.
#[derive(Parser, Debug)]
#[command(
    name = "scaffold",
    version,
    about = "Bootstrap the webhook bridge project skeleton"
)]
pub struct Cli {
    /// Change into this directory before doing anything else.
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Print what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the project layout as a tree.
    Plan,
    /// Report which expected paths are present on disk.
    Check,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
