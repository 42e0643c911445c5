//! Fetch command - populate the ktlint cache

use crate::config::Config;
use crate::error::HookResult;
use crate::runner::LintRunner;
use crate::ui::UiContext;

/// Execute the fetch command
pub async fn execute(config: &Config) -> HookResult<()> {
    let runner = LintRunner::new(config, UiContext::detect());
    let path = runner.ensure_binary().await?;
    println!("{}", path.display());
    Ok(())
}
