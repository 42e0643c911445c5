//! Configuration management for ktlint-hook

pub mod schema;

pub use schema::Config;

use crate::error::{HookError, HookResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// File name of the repository-local config
pub const LOCAL_CONFIG_FILE: &str = ".ktlint-hook.toml";

/// A configuration together with the file it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when no file was found and defaults are in effect
    pub source: Option<PathBuf>,
}

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ktlint-hook")
            .join("config.toml")
    }

    /// Find the nearest `.ktlint-hook.toml`, walking up from `start`
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Resolve the config in effect.
    ///
    /// An explicit path must exist. Otherwise the nearest local file (when
    /// `search_from` is given) wins over the global file, which wins over
    /// built-in defaults.
    pub async fn resolve(
        explicit: Option<&Path>,
        search_from: Option<&Path>,
    ) -> HookResult<LoadedConfig> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(HookError::ConfigNotFound(path.to_path_buf()));
            }
            return Self::with_path(path.to_path_buf()).load_existing().await;
        }

        if let Some(local) = search_from.and_then(Self::find_local_config) {
            debug!("Found local config: {}", local.display());
            return Self::with_path(local).load_existing().await;
        }

        Self::new().load().await
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub async fn load(&self) -> HookResult<LoadedConfig> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(LoadedConfig {
                config: Config::default(),
                source: None,
            });
        }

        self.load_existing().await
    }

    async fn load_existing(&self) -> HookResult<LoadedConfig> {
        let config = self.load_from_file(&self.config_path).await?;
        Ok(LoadedConfig {
            config,
            source: Some(self.config_path.clone()),
        })
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> HookResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| HookError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| HookError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> HookResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            HookError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> HookResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HookError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
