//! Shell command execution with combined output

use crate::error::{HookError, HookResult};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Exit code and combined stdout/stderr of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub output: String,
}

impl CommandResult {
    pub fn new(code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            code,
            output: output.into(),
        }
    }
}

/// Runs a shell command line
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute `command` and capture its result.
    ///
    /// A non-zero exit is not an error: the code and output are returned.
    /// Only failing to start the shell is.
    async fn execute(&self, command: &str) -> HookResult<CommandResult>;
}

/// Executes through the platform shell with stderr folded into stdout
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }

    #[cfg(not(windows))]
    fn shell(command_line: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command_line);
        cmd
    }

    // `arg` would re-quote the line with MSVC rules, which cmd does not undo
    #[cfg(windows)]
    fn shell(command_line: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.args(["/D", "/S", "/C"]).raw_arg(cmd_payload(command_line));
        cmd
    }
}

/// Argument for `cmd /S /C`: cmd strips exactly the outer quote pair and
/// runs the rest untouched
pub fn cmd_payload(command_line: &str) -> String {
    format!("\"{}\"", command_line)
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &str) -> HookResult<CommandResult> {
        debug!("Executing: {}", command);

        // Redirect inside the shell so both streams interleave in order
        let output = Self::shell(&format!("{} 2>&1", command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| HookError::command_failed(command, e))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!("Exit status: {:?}", output.status.code());
        Ok(CommandResult::new(output.status.code(), text))
    }
}

/// Double-quote `arg` for the platform shell
pub fn quote(arg: &str) -> String {
    #[cfg(windows)]
    {
        cmd_quote(arg)
    }
    #[cfg(not(windows))]
    {
        posix_quote(arg)
    }
}

/// Double-quote for cmd. Backslashes are path separators there and `"`
/// cannot occur in Windows file names, so nothing is escaped.
pub fn cmd_quote(arg: &str) -> String {
    format!("\"{}\"", arg)
}

/// Double-quote for `sh`, escaping characters that stay live inside
/// double quotes
pub fn posix_quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
