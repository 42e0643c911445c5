//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager, LoadedConfig, LOCAL_CONFIG_FILE};
use crate::error::{HookError, HookResult};
use console::style;
use std::path::PathBuf;

/// Execute the config command
pub async fn execute(args: ConfigArgs, loaded: &LoadedConfig) -> HookResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(&loaded.config)?,
        Some(ConfigAction::Path) => show_path(loaded),
        Some(ConfigAction::Init { force, global }) => init_config(force, global).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> HookResult<()> {
    let toml = toml::to_string_pretty(config)?;
    println!("{}", toml);
    Ok(())
}

fn show_path(loaded: &LoadedConfig) {
    match &loaded.source {
        Some(path) => println!("{}", path.display()),
        None => println!(
            "{} (not present, using defaults)",
            ConfigManager::default_config_path().display()
        ),
    }
}

async fn init_config(force: bool, global: bool) -> HookResult<()> {
    let path = if global {
        ConfigManager::default_config_path()
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| HookError::io("getting current directory", e))?;
        cwd.join(LOCAL_CONFIG_FILE)
    };

    if path.exists() && !force {
        return Err(HookError::ConfigExists(path));
    }

    write_default(path).await
}

async fn write_default(path: PathBuf) -> HookResult<()> {
    let manager = ConfigManager::with_path(path);
    manager.save(&Config::default()).await?;
    println!(
        "{} Configuration initialized at {}",
        style("[OK]").green(),
        manager.path().display()
    );
    Ok(())
}
