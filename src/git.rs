//! Listing git-tracked files

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Lists version-controlled files matching pathspecs
#[async_trait]
pub trait FileLister: Send + Sync {
    /// Tracked files matching any of `patterns`, in index order.
    ///
    /// A failed listing yields an empty list rather than an error.
    async fn tracked_files(&self, patterns: &[String]) -> Vec<String>;
}

/// `git ls-files` in a working directory
pub struct GitLister {
    git: String,
    workdir: Option<PathBuf>,
}

impl GitLister {
    /// List from the current working directory
    pub fn new() -> Self {
        Self {
            git: "git".to_string(),
            workdir: None,
        }
    }

    /// List from `dir` instead of the current working directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            git: "git".to_string(),
            workdir: Some(dir.into()),
        }
    }
}

impl Default for GitLister {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileLister for GitLister {
    async fn tracked_files(&self, patterns: &[String]) -> Vec<String> {
        let mut cmd = Command::new(&self.git);
        // -z: NUL separated, paths are not C-quoted
        cmd.args(["ls-files", "-z", "--"]).args(patterns);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("Executing: git ls-files -z -- {:?}", patterns);
        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) => {
                warn!("Could not run git ls-files: {}", e);
                return Vec::new();
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("git ls-files failed: {}", stderr.trim());
            return Vec::new();
        }

        parse_ls_files(&output.stdout)
    }
}

/// Split NUL separated `git ls-files -z` output
fn parse_ls_files(stdout: &[u8]) -> Vec<String> {
    stdout
        .split(|b| *b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
        .collect()
}
