//! Local cache for the ktlint binary
//!
//! The binary lives at `<cache_dir>/<binary_name>`. It is downloaded once
//! into a `.tmp` sibling and renamed into place, then reused on every run.
//!
//! The cached file is never version checked: bumping the pinned version
//! does not replace a binary that is already present.

mod download;

pub use download::{Downloader, UreqDownloader};

use crate::config::schema::KtlintConfig;
use crate::error::{HookError, HookResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Format bytes as human-readable size (e.g., "1.5 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// The cached ktlint binary and where it comes from
#[derive(Debug, Clone)]
pub struct BinaryCache {
    path: PathBuf,
    tmp_path: PathBuf,
    url: String,
}

impl BinaryCache {
    /// Create a cache entry for `<cache_dir>/<binary_name>`
    pub fn new(cache_dir: &Path, binary_name: &str, url: impl Into<String>) -> Self {
        Self {
            path: cache_dir.join(binary_name),
            tmp_path: cache_dir.join(format!("{}.tmp", binary_name)),
            url: url.into(),
        }
    }

    /// Build the cache entry described by the `[ktlint]` config section
    pub fn from_config(config: &KtlintConfig) -> Self {
        Self::new(
            &config.resolved_cache_dir(),
            &config.binary_name,
            config.resolved_url(),
        )
    }

    /// Final location of the binary
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Download staging location
    pub fn tmp_path(&self) -> &Path {
        &self.tmp_path
    }

    /// Release asset URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether a binary is present, with its size
    pub async fn cached_size(&self) -> Option<u64> {
        match fs::metadata(&self.path).await {
            Ok(meta) if meta.is_file() => Some(meta.len()),
            _ => None,
        }
    }

    /// Make sure the binary exists, downloading it when absent.
    ///
    /// An existing file is trusted as-is and no request is made. Download and
    /// filesystem failures are returned; nothing is retried.
    pub async fn ensure_cached(&self, downloader: &dyn Downloader) -> HookResult<&Path> {
        if self.cached_size().await.is_some() {
            debug!("Using cached ktlint at {}", self.path.display());
            return Ok(&self.path);
        }

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                HookError::io(format!("creating cache directory {}", dir.display()), e)
            })?;
        }

        info!("Downloading ktlint from {}", self.url);
        let bytes = match downloader.download(&self.url, &self.tmp_path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.discard_tmp().await;
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&self.tmp_path, &self.path).await {
            self.discard_tmp().await;
            return Err(HookError::CacheWrite {
                path: self.path.clone(),
                source: e,
            });
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o755);
            fs::set_permissions(&self.path, perms)
                .await
                .map_err(|e| HookError::io("marking ktlint executable", e))?;
        }

        info!(
            "Cached ktlint ({}) at {}",
            format_bytes(bytes),
            self.path.display()
        );
        Ok(&self.path)
    }

    async fn discard_tmp(&self) {
        if let Err(e) = fs::remove_file(&self.tmp_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Could not remove {}: {}", self.tmp_path.display(), e);
            }
        }
    }
}
