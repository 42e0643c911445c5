//! Configuration schema for ktlint-hook
//!
//! Configuration is read from `.ktlint-hook.toml` in the repository or
//! `~/.config/ktlint-hook/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder substituted with the pinned version in `download_url`
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ktlint binary settings
    pub ktlint: KtlintConfig,

    /// Java runtime settings
    pub java: JavaConfig,

    /// Tracked file selection
    pub files: FilesConfig,
}

/// ktlint binary and cache location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KtlintConfig {
    /// Pinned ktlint release
    pub version: String,

    /// Release asset URL, `{version}` is replaced with `version`
    pub download_url: String,

    /// Cache directory override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// File name of the cached binary
    pub binary_name: String,
}

impl Default for KtlintConfig {
    fn default() -> Self {
        Self {
            version: "1.7.1".to_string(),
            download_url: "https://github.com/pinterest/ktlint/releases/download/{version}/ktlint"
                .to_string(),
            cache_dir: None,
            binary_name: "ktlint".to_string(),
        }
    }
}

impl KtlintConfig {
    /// The download URL with the pinned version filled in
    pub fn resolved_url(&self) -> String {
        self.download_url.replace(VERSION_PLACEHOLDER, &self.version)
    }

    /// The cache directory, falling back to the user cache root
    pub fn resolved_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pre-commit")
        })
    }
}

/// Java runtime used to launch ktlint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaConfig {
    /// Java executable
    pub binary: String,

    /// Probe `java -version` to add version-gated flags
    pub detect_version: bool,

    /// Flags appended after the version-gated ones
    pub extra_flags: Vec<String>,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            binary: "java".to_string(),
            detect_version: true,
            extra_flags: vec![],
        }
    }
}

/// Which tracked files are formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Pathspecs passed to `git ls-files`
    pub patterns: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            patterns: vec!["*.kt".to_string(), "*.kts".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pinned_release() {
        let config = Config::default();
        assert_eq!(config.ktlint.version, "1.7.1");
        assert_eq!(
            config.ktlint.resolved_url(),
            "https://github.com/pinterest/ktlint/releases/download/1.7.1/ktlint"
        );
        assert_eq!(config.files.patterns, vec!["*.kt", "*.kts"]);
        assert!(config.java.detect_version);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ktlint]
            version = "1.5.0"
            "#,
        )
        .unwrap();

        assert_eq!(config.ktlint.version, "1.5.0");
        assert_eq!(config.ktlint.binary_name, "ktlint");
        assert_eq!(config.java.binary, "java");
        assert!(config.ktlint.resolved_url().contains("/1.5.0/"));
    }

    #[test]
    fn cache_dir_override() {
        let config: Config = toml::from_str(
            r#"
            [ktlint]
            cache_dir = "/opt/ktlint-cache"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.ktlint.resolved_cache_dir(),
            PathBuf::from("/opt/ktlint-cache")
        );
    }

    #[test]
    fn default_cache_dir_is_pre_commit() {
        let dir = KtlintConfig::default().resolved_cache_dir();
        assert!(dir.ends_with("pre-commit"));
    }

    #[test]
    fn serialize_roundtrip() {
        let mut config = Config::default();
        config.java.extra_flags = vec!["-Xmx512m".to_string()];

        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[ktlint]"));
        assert!(!text.contains("cache_dir"));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
