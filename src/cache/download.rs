//! Streaming download of the ktlint release asset

use crate::error::{HookError, HookResult};
use crate::ui::{DownloadProgress, UiContext};
use async_trait::async_trait;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fetches a URL into a local file
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Stream `url` into `dest`, returning the number of bytes written
    async fn download(&self, url: &str, dest: &Path) -> HookResult<u64>;
}

/// HTTP downloader backed by ureq
pub struct UreqDownloader {
    ui: UiContext,
}

impl UreqDownloader {
    /// Create a downloader that reports progress according to `ui`
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn fetch_blocking(ui: UiContext, url: &str, dest: &Path) -> HookResult<u64> {
        debug!("GET {}", url);
        let response = ureq::get(url)
            .call()
            .map_err(|e| HookError::download(url, e))?;

        let total = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let mut reader = response.into_body().into_reader();
        let file = File::create(dest).map_err(|e| cache_write(dest, e))?;

        let label = dest
            .file_name()
            .map(|n| n.to_string_lossy().trim_end_matches(".tmp").to_string())
            .unwrap_or_else(|| "ktlint".to_string());
        let progress = DownloadProgress::new(&ui, &label, total);
        let mut writer = progress.wrap(io::BufWriter::new(file));

        let copied = io::copy(&mut reader, &mut writer);
        let flushed = writer.flush();
        progress.finish();

        let written = copied.map_err(|e| cache_write(dest, e))?;
        flushed.map_err(|e| cache_write(dest, e))?;
        Ok(written)
    }
}

#[async_trait]
impl Downloader for UreqDownloader {
    async fn download(&self, url: &str, dest: &Path) -> HookResult<u64> {
        let ui = self.ui;
        let url = url.to_string();
        let dest: PathBuf = dest.to_path_buf();

        tokio::task::spawn_blocking(move || Self::fetch_blocking(ui, &url, &dest))
            .await
            .map_err(|e| HookError::Internal(format!("download task failed: {}", e)))?
    }
}

fn cache_write(path: &Path, source: io::Error) -> HookError {
    HookError::CacheWrite {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;
    use tempfile::TempDir;

    /// Serve `response` to a single connection on loopback, returning the URL
    fn serve_once(response: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response);
            let _ = stream.flush();
        });
        format!("http://{}/1.7.1/ktlint", addr)
    }

    #[tokio::test]
    async fn streams_body_into_dest() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 8\r\nConnection: close\r\n\r\nJARBYTES",
        );
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("ktlint.tmp");
        let downloader = UreqDownloader::new(UiContext::non_interactive());

        let written = downloader.download(&url, &dest).await.unwrap();

        assert_eq!(written, 8);
        assert_eq!(std::fs::read(&dest).unwrap(), b"JARBYTES");
    }

    #[tokio::test]
    async fn error_status_is_not_saved_as_binary() {
        let url = serve_once(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nNot Found",
        );
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("ktlint.tmp");
        let downloader = UreqDownloader::new(UiContext::non_interactive());

        let err = downloader.download(&url, &dest).await.unwrap_err();

        assert!(matches!(
            err,
            HookError::Download {
                source: ureq::Error::StatusCode(404),
                ..
            }
        ));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_download_error() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("ktlint.tmp");
        let downloader = UreqDownloader::new(UiContext::non_interactive());

        // Port 9 on loopback refuses connections without touching the network
        let err = downloader
            .download("http://127.0.0.1:9/ktlint", &dest)
            .await
            .unwrap_err();

        assert!(matches!(err, HookError::Download { .. }));
        assert!(err.to_string().contains("127.0.0.1:9"));
        assert!(!dest.exists());
    }
}
