//! Querying the installed Java runtime

use crate::error::{HookError, HookResult};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Source of free-form runtime version text
#[async_trait]
pub trait RuntimeProbe: Send + Sync {
    /// Raw output of the runtime's version query
    async fn version_text(&self) -> HookResult<String>;
}

/// Runs `<java> -version`
pub struct JavaProbe {
    binary: String,
}

impl JavaProbe {
    /// Create a probe for the given java executable
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl RuntimeProbe for JavaProbe {
    async fn version_text(&self) -> HookResult<String> {
        let command = format!("{} -version", self.binary);
        debug!("Executing: {}", command);

        let output = Command::new(&self.binary)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| HookError::command_failed(command.as_str(), e))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(HookError::command_exec(command, stderr));
        }

        // The JDK prints its banner on stderr
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&stderr);
        Ok(text)
    }
}
