//! Status command - show what a run would use

use crate::cache::format_bytes;
use crate::config::LoadedConfig;
use crate::error::HookResult;
use crate::runner::LintRunner;
use crate::ui::UiContext;
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "[FAIL] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the status command
pub async fn execute(loaded: &LoadedConfig) -> HookResult<()> {
    let config = &loaded.config;
    let runner = LintRunner::new(config, UiContext::non_interactive());

    println!("{}", style("ktlint-hook Status").bold().cyan());

    println!();
    println!("{}", style("Configuration:").bold());
    match &loaded.source {
        Some(path) => println!("  {} Loaded from {}", CHECK, path.display()),
        None => println!("  {} Built-in defaults", CHECK),
    }

    println!();
    println!("{}", style("ktlint:").bold());
    println!("  {} Version: {}", CHECK, config.ktlint.version);
    let cache = runner.cache();
    match cache.cached_size().await {
        Some(size) => println!(
            "  {} Cached: {} ({})",
            CHECK,
            cache.path().display(),
            format_bytes(size)
        ),
        None => println!(
            "  {} {} - will download from {}",
            WARN,
            style(format!("Not cached at {}", cache.path().display())).yellow(),
            cache.url()
        ),
    }

    println!();
    println!("{}", style("Java:").bold());
    let version = runner.java_version().await;
    match version {
        Some(v) => println!("  {} {}: Java {}", CHECK, config.java.binary, v),
        None if !config.java.detect_version => {
            println!("  {} Version detection disabled", WARN)
        }
        None => println!(
            "  {} {} - no version-gated flags will be passed",
            CROSS,
            style(format!("Could not detect version of {}", config.java.binary)).red()
        ),
    }
    let flags = runner.java_flags(version);
    if flags.is_empty() {
        println!("  {} Flags: (none)", CHECK);
    } else {
        println!("  {} Flags: {}", CHECK, flags.join(" "));
    }

    println!();
    println!("{}", style("Files:").bold());
    let files = runner.tracked_files().await;
    if files.is_empty() {
        println!("  {} No tracked files match {}", WARN, config.files.patterns.join(" "));
    } else {
        println!(
            "  {} {} tracked file(s) match {}",
            CHECK,
            files.len(),
            config.files.patterns.join(" ")
        );
    }

    Ok(())
}
