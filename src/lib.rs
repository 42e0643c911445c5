//! ktlint-hook - ktlint format pass for pre-commit
//!
//! Caches the ktlint binary, lists git-tracked Kotlin sources and runs
//! ktlint in format mode over them. Any output from ktlint fails the hook.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod jvm;
pub mod process;
pub mod runner;
pub mod ui;

pub use error::{HookError, HookResult};
pub use runner::{LintRunner, Outcome};
