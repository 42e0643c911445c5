//! Download progress with CI fallback

use super::context::UiContext;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;

/// Byte progress for the ktlint download.
///
/// Draws an indicatif bar on stderr in interactive mode and stays hidden
/// otherwise, so hook output in CI logs is just ktlint's own text.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Create a progress indicator for `label`, sized when `total` is known
    pub fn new(ctx: &UiContext, label: &str, total: Option<u64>) -> Self {
        if !ctx.use_fancy_output() {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::with_draw_target(total, ProgressDrawTarget::stderr());
        let template = if total.is_some() {
            "  {spinner:.cyan} Downloading {prefix}  {bar:20.cyan/dim} {bytes}/{total_bytes} {elapsed:.dim}"
        } else {
            "  {spinner:.cyan} Downloading {prefix}  {bytes} {elapsed:.dim}"
        };
        let style = ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .progress_chars("━╸─");
        bar.set_style(style);
        bar.set_prefix(label.to_string());
        bar.enable_steady_tick(std::time::Duration::from_millis(120));
        Self { bar }
    }

    /// Wrap a writer so every write advances the bar
    pub fn wrap<W: Write>(&self, writer: W) -> impl Write {
        self.bar.wrap_write(writer)
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        self.bar.disable_steady_tick();
        self.bar.finish_and_clear();
    }
}
