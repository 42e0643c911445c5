//! ktlint-hook - ktlint format pass for pre-commit
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use ktlint_hook::cli::{Cli, Commands};
use ktlint_hook::config::ConfigManager;
use ktlint_hook::error::{HookError, HookResult};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> HookResult<u8> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("ktlint_hook=warn"),
        1 => EnvFilter::new("ktlint_hook=info"),
        _ => EnvFilter::new("ktlint_hook=debug"),
    };

    // stdout is reserved for ktlint output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cwd = if cli.no_local {
        debug!("Local config discovery disabled (--no-local)");
        None
    } else {
        Some(std::env::current_dir().map_err(|e| HookError::io("getting current directory", e))?)
    };

    let loaded = ConfigManager::resolve(cli.config.as_deref(), cwd.as_deref()).await?;
    match &loaded.source {
        Some(path) => debug!("Using config {}", path.display()),
        None => debug!("Using built-in defaults"),
    }

    match cli.command {
        None | Some(Commands::Run) => ktlint_hook::cli::commands::run(&loaded.config).await,
        Some(Commands::Fetch) => ktlint_hook::cli::commands::fetch(&loaded.config)
            .await
            .map(|()| 0),
        Some(Commands::Status) => ktlint_hook::cli::commands::status(&loaded).await.map(|()| 0),
        Some(Commands::Config(args)) => ktlint_hook::cli::commands::config(args, &loaded)
            .await
            .map(|()| 0),
    }
}
