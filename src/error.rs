//! Error types for ktlint-hook
//!
//! All modules use `HookResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ktlint-hook operations
pub type HookResult<T> = Result<T, HookError>;

/// All errors that can occur in ktlint-hook
#[derive(Error, Debug)]
pub enum HookError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration file already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Cache errors
    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Failed to write {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    // Serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HookError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a download error for `url`
    pub fn download(url: impl Into<String>, source: ureq::Error) -> Self {
        Self::Download {
            url: url.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Download { .. } => Some(
                "Check network access to github.com, or place the ktlint binary in the cache directory (see: ktlint-hook status)",
            ),
            Self::CacheWrite { .. } => Some("Check permissions of the cache directory"),
            Self::ConfigInvalid { .. } => Some("Run: ktlint-hook config show"),
            Self::ConfigExists(_) => Some("Pass --force to overwrite"),
            Self::CommandFailed { .. } => Some("Make sure the system shell (sh, or cmd on Windows) is available"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HookError::ConfigNotFound(PathBuf::from("/tmp/missing.toml"));
        assert!(err.to_string().contains("Configuration file not found"));
        assert!(err.to_string().contains("/tmp/missing.toml"));
    }

    #[test]
    fn error_hint() {
        let err = HookError::ConfigExists(PathBuf::from(".ktlint-hook.toml"));
        assert_eq!(err.hint(), Some("Pass --force to overwrite"));
    }

    #[test]
    fn io_error_keeps_context() {
        let err = HookError::io(
            "reading cache",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "IO error: reading cache");
        assert!(err.hint().is_none());
    }
}
