// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command invocations and their recorded outcomes.
//!
//! A [`CommandRequest`] names what to run; the command runner fills in its
//! defaults (shell, working directory, timeout) and hands back a
//! [`CommandResult`]. Results are created fresh for every invocation and are
//! never reused.

use crate::severity::{classify, Severity};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variables injected into a command, additive to the
/// inherited process environment.
pub type Environment = BTreeMap<String, String>;

/// Interpreter used when neither the fact nor the action overrides it.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Upper bound on a single command invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A command to run through a shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRequest {
    pub command: String,
    /// Interpreter override; `None` uses the runner's default
    pub shell: Option<String>,
    pub env: Environment,
}

impl CommandRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into(), ..Default::default() }
    }

    crate::setters! {
        set { env: Environment }
        option { shell: String }
    }

    /// Apply an optional shell override, keeping the runner default when `None`.
    pub fn shell_override(mut self, shell: Option<&str>) -> Self {
        if let Some(shell) = shell.filter(|s| !s.is_empty()) {
            self.shell = Some(shell.to_string());
        }
        self
    }
}

/// Failure to run a command to completion.
///
/// A non-zero exit status is not an `ExecError`: it is recorded only in
/// [`CommandResult::exit_code`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    #[error("failed to spawn `{shell}`: {message}")]
    Spawn { shell: String, message: String },

    #[error("command timed out after {}s", .timeout.as_secs())]
    Timeout { timeout: Duration },

    #[error("failed to collect command output: {message}")]
    Io { message: String },
}

/// Outcome of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub command: String,
    pub shell: String,
    pub dir: PathBuf,
    pub timeout: Duration,
    pub env: Environment,
    /// Captured stdout, trailing newlines trimmed
    pub stdout: String,
    /// Captured stderr, trailing newlines trimmed
    pub stderr: String,
    /// Process exit code, `-1` when there is none (spawn failure, timeout, signal)
    pub exit_code: i32,
    pub error: Option<ExecError>,
}

impl CommandResult {
    /// Whether the command exited with status 0.
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.exit_code == 0
    }

    /// Log severity for this outcome.
    pub fn severity(&self) -> Severity {
        classify(self.error.as_ref(), &self.stderr)
    }

    /// The error message, or an empty string when the command completed.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// Decode captured output and strip trailing newlines.
pub fn trim_output(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end_matches('\n').to_string()
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
