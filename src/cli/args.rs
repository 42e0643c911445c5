//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// ktlint-hook - Format git-tracked Kotlin files with ktlint
///
/// Downloads ktlint into the user cache on first use, runs its format pass
/// over every tracked `*.kt` and `*.kts` file, and fails whenever ktlint
/// prints anything, so reformatted files block the commit.
#[derive(Parser, Debug)]
#[command(name = "ktlint-hook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KTLINT_HOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .ktlint-hook.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format tracked Kotlin files (the pre-commit entry point)
    Run,

    /// Download ktlint into the cache if missing and print its path
    Fetch,

    /// Show cache, Java and file discovery status
    Status,

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Show the configuration file in effect
    Path,

    /// Write a default .ktlint-hook.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// Write the user-wide config instead
        #[arg(long)]
        global: bool,
    },
}
