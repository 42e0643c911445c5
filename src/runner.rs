//! The format pass: fetch ktlint, list Kotlin files, run, judge the output

use crate::cache::{BinaryCache, Downloader, UreqDownloader};
use crate::config::Config;
use crate::error::HookResult;
use crate::git::{FileLister, GitLister};
use crate::jvm::{self, JavaProbe, RuntimeProbe};
use crate::process::{quote, CommandExecutor, CommandResult, ShellExecutor};
use crate::ui::UiContext;
use std::path::Path;
use tracing::{debug, info};

/// Message printed when there is nothing to format
pub const NO_FILES_MESSAGE: &str = "No tracked Kotlin files found.";

/// Fixed inputs of a run
#[derive(Debug, Clone)]
pub struct Settings {
    pub java_binary: String,
    pub detect_java_version: bool,
    pub extra_flags: Vec<String>,
    pub patterns: Vec<String>,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            java_binary: config.java.binary.clone(),
            detect_java_version: config.java.detect_version,
            extra_flags: config.java.extra_flags.clone(),
            patterns: config.files.patterns.clone(),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing tracked matched; ktlint was not started
    NoFiles,
    /// ktlint printed nothing and exited 0
    Clean,
    /// ktlint printed something: lint errors or a note about reformatted files
    Reported { output: String, code: Option<i32> },
    /// ktlint printed nothing but exited non-zero (or was killed)
    Failed { code: Option<i32> },
}

impl Outcome {
    /// Translate a ktlint result.
    ///
    /// Any output at all fails the hook, even with exit code 0, because a
    /// format pass that rewrote files reports them as output and the commit
    /// must be re-run by a human.
    pub fn from_result(result: CommandResult) -> Self {
        if !result.output.is_empty() {
            return Self::Reported {
                output: result.output,
                code: result.code,
            };
        }
        match result.code {
            Some(0) => Self::Clean,
            code => Self::Failed { code },
        }
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NoFiles | Self::Clean => 0,
            Self::Reported { .. } => 1,
            Self::Failed { code } => code
                .and_then(|c| u8::try_from(c).ok())
                .filter(|c| *c != 0)
                .unwrap_or(1),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

/// Build `<java> <flags> -jar <jar> --format <files>` as one shell line
pub fn build_format_command(
    java_binary: &str,
    flags: &[String],
    jar: &Path,
    files: &[String],
) -> String {
    let mut parts = Vec::with_capacity(flags.len() + files.len() + 4);
    parts.push(quote(java_binary));
    parts.extend(flags.iter().cloned());
    parts.push("-jar".to_string());
    parts.push(quote(&jar.to_string_lossy()));
    parts.push("--format".to_string());
    parts.extend(files.iter().map(|f| quote(f)));
    parts.join(" ")
}

/// Runs ktlint's format pass over the tracked Kotlin files
pub struct LintRunner {
    settings: Settings,
    cache: BinaryCache,
    downloader: Box<dyn Downloader>,
    lister: Box<dyn FileLister>,
    probe: Box<dyn RuntimeProbe>,
    executor: Box<dyn CommandExecutor>,
}

impl LintRunner {
    /// Runner wired to the network, git, the JDK and the shell
    pub fn new(config: &Config, ui: UiContext) -> Self {
        Self {
            settings: Settings::from_config(config),
            cache: BinaryCache::from_config(&config.ktlint),
            downloader: Box::new(UreqDownloader::new(ui)),
            lister: Box::new(GitLister::new()),
            probe: Box::new(JavaProbe::new(config.java.binary.clone())),
            executor: Box::new(ShellExecutor::new()),
        }
    }

    /// Runner with every external interaction supplied by the caller
    pub fn with_components(
        settings: Settings,
        cache: BinaryCache,
        downloader: Box<dyn Downloader>,
        lister: Box<dyn FileLister>,
        probe: Box<dyn RuntimeProbe>,
        executor: Box<dyn CommandExecutor>,
    ) -> Self {
        Self {
            settings,
            cache,
            downloader,
            lister,
            probe,
            executor,
        }
    }

    pub fn cache(&self) -> &BinaryCache {
        &self.cache
    }

    /// Download ktlint unless it is already cached
    pub async fn ensure_binary(&self) -> HookResult<&Path> {
        self.cache.ensure_cached(self.downloader.as_ref()).await
    }

    /// Tracked files the format pass would touch
    pub async fn tracked_files(&self) -> Vec<String> {
        self.lister.tracked_files(&self.settings.patterns).await
    }

    /// Detected Java major version, `None` when unknown or detection is off
    pub async fn java_version(&self) -> Option<u32> {
        if !self.settings.detect_java_version {
            debug!("Java version detection disabled");
            return None;
        }
        jvm::detect_major_version(self.probe.as_ref()).await
    }

    /// Flags passed to java: version-gated ones, then configured extras
    pub fn java_flags(&self, version: Option<u32>) -> Vec<String> {
        let mut flags = jvm::derive_flags(version);
        flags.extend(self.settings.extra_flags.iter().cloned());
        flags
    }

    /// Run the whole pass
    pub async fn run(&self) -> HookResult<Outcome> {
        let jar = self.ensure_binary().await?;

        let files = self.tracked_files().await;
        if files.is_empty() {
            return Ok(Outcome::NoFiles);
        }
        info!("Formatting {} Kotlin file(s)", files.len());

        let version = self.java_version().await;
        let flags = self.java_flags(version);
        let command = build_format_command(&self.settings.java_binary, &flags, jar, &files);

        let result = self.executor.execute(&command).await?;
        Ok(Outcome::from_result(result))
    }
}
