// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution through a shell interpreter.

use async_trait::async_trait;
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use yr_core::{
    trim_output, CommandRequest, CommandResult, ExecError, DEFAULT_SHELL, DEFAULT_TIMEOUT,
};

/// Runs commands and reports what happened.
///
/// Implementations never fail: spawn errors and timeouts are recorded in
/// the returned [`CommandResult`].
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, request: &CommandRequest) -> CommandResult;
}

/// Runs `<shell> -c <command>` as a child process.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    dir: PathBuf,
    timeout: Duration,
}

impl ShellRunner {
    /// Runner with default shell and timeout, rooted at the process working directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self::with_defaults(DEFAULT_SHELL, std::env::current_dir()?, DEFAULT_TIMEOUT))
    }

    pub fn with_defaults(shell: impl Into<String>, dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self { shell: shell.into(), dir: dir.into(), timeout }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, request: &CommandRequest) -> CommandResult {
        let shell = request
            .shell
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.shell)
            .to_string();

        let mut result = CommandResult {
            command: request.command.clone(),
            shell: shell.clone(),
            dir: self.dir.clone(),
            timeout: self.timeout,
            env: request.env.clone(),
            stdout: String::new(),
            stderr: String::new(),
            exit_code: -1,
            error: None,
        };

        let mut cmd = tokio::process::Command::new(&shell);
        cmd.arg("-c")
            .arg(&request.command)
            .current_dir(&self.dir)
            .envs(&request.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .process_group(0)
            .kill_on_drop(true);

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!(%shell, error = %e, "spawn failed");
                result.error = Some(ExecError::Spawn { shell, message: e.to_string() });
                return result;
            }
        };
        let pid = child.id();

        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                result.stdout = trim_output(&output.stdout);
                result.stderr = trim_output(&output.stderr);
                result.exit_code = output.status.code().unwrap_or(-1);
            }
            Ok(Err(e)) => {
                result.error = Some(ExecError::Io { message: e.to_string() });
            }
            Err(_) => {
                // The shell leads its own group; take any children down with it.
                if let Some(pid) = pid.and_then(|p| i32::try_from(p).ok()) {
                    if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
                        tracing::debug!(pid, error = %e, "killpg after timeout failed");
                    }
                }
                result.error = Some(ExecError::Timeout { timeout: self.timeout });
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
