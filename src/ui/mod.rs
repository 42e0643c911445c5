//! UI helpers for terminal output
//!
//! Fancy output (progress bars) only on interactive terminals, plain or
//! hidden output in CI and when running under a git hook without a TTY.

mod context;
mod progress;

pub use context::UiContext;
pub use progress::DownloadProgress;
