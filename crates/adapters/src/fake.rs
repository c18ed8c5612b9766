// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted command runner for tests.

use crate::subprocess::CommandRunner;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use yr_core::{CommandRequest, CommandResult, ExecError, DEFAULT_SHELL, DEFAULT_TIMEOUT};

/// Scripted outcome for one command string.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub error: Option<ExecError>,
    /// Virtual time spent before the result is returned
    pub delay: Duration,
}

impl Scripted {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), ..Default::default() }
    }

    pub fn exit(code: i32) -> Self {
        Self { exit_code: code, ..Default::default() }
    }

    pub fn stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn error(mut self, error: ExecError) -> Self {
        self.exit_code = -1;
        self.error = Some(error);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct FakeState {
    scripts: HashMap<String, Scripted>,
    fallback: Scripted,
    calls: Vec<CommandRequest>,
}

/// Fake runner returning scripted results keyed by command string.
///
/// Commands without a script succeed with empty output. Every request is
/// recorded, environment included.
#[derive(Clone)]
pub struct FakeRunner {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                scripts: HashMap::new(),
                fallback: Scripted::default(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome of `command`, replacing any earlier script.
    pub fn script(&self, command: impl Into<String>, outcome: Scripted) -> &Self {
        self.inner.lock().scripts.insert(command.into(), outcome);
        self
    }

    /// Outcome for commands without a script.
    pub fn fallback(&self, outcome: Scripted) -> &Self {
        self.inner.lock().fallback = outcome;
        self
    }

    /// All requests seen so far, in order.
    pub fn calls(&self) -> Vec<CommandRequest> {
        self.inner.lock().calls.clone()
    }

    /// Command strings seen so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.inner.lock().calls.iter().map(|c| c.command.clone()).collect()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, request: &CommandRequest) -> CommandResult {
        let outcome = {
            let mut state = self.inner.lock();
            state.calls.push(request.clone());
            state.scripts.get(&request.command).cloned().unwrap_or_else(|| state.fallback.clone())
        };

        if !outcome.delay.is_zero() {
            tokio::time::sleep(outcome.delay).await;
        }

        CommandResult {
            command: request.command.clone(),
            shell: request.shell.clone().unwrap_or_else(|| DEFAULT_SHELL.to_string()),
            dir: PathBuf::from("."),
            timeout: DEFAULT_TIMEOUT,
            env: request.env.clone(),
            stdout: outcome.stdout,
            stderr: outcome.stderr,
            exit_code: outcome.exit_code,
            error: outcome.error,
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
