// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured log events emitted by the engine.
//!
//! Every event has a fixed message tag and field set. Events are emitted
//! through `tracing` as they happen and also kept, so a pass can report
//! exactly what it logged.

use std::path::PathBuf;
use yr_core::{CommandResult, Severity};

/// Dispatch to the `tracing` macro matching a runtime [`Severity`].
macro_rules! at_level {
    ($severity:expr, $($args:tt)+) => {
        match $severity {
            Severity::Debug => tracing::debug!($($args)+),
            Severity::Info => tracing::info!($($args)+),
            Severity::Warn => tracing::warn!($($args)+),
            Severity::Error => tracing::error!($($args)+),
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    /// First pass of the process
    Starting { args: String },
    /// The effective configuration checksum changed
    ConfigurationHash { hash: u32, previous: Option<u32> },
    ConfigurationLoaded { file: PathBuf, facts: usize, actions: usize, interval: String },
    /// Full effective configuration as JSON
    ConfigurationDump { config: String },
    DuplicateFact { name: String, count: usize },
    FactGathered { name: String, result: CommandResult },
    RuleChecked { result: CommandResult },
    ActionExecuted { result: CommandResult },
    Sleeping { millis: u64 },
}

impl LogEvent {
    /// The message tag.
    pub fn tag(&self) -> &'static str {
        match self {
            LogEvent::Starting { .. } => "starting",
            LogEvent::ConfigurationHash { .. } => "configuration hash",
            LogEvent::ConfigurationLoaded { .. } => "configuration loaded",
            LogEvent::ConfigurationDump { .. } => "configuration dump",
            LogEvent::DuplicateFact { .. } => "duplicate fact name",
            LogEvent::FactGathered { .. } => "fact gathered",
            LogEvent::RuleChecked { .. } => "rule checked",
            LogEvent::ActionExecuted { .. } => "action executed",
            LogEvent::Sleeping { .. } => "sleeping",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            LogEvent::Starting { .. }
            | LogEvent::ConfigurationHash { .. }
            | LogEvent::ConfigurationLoaded { .. } => Severity::Info,
            LogEvent::DuplicateFact { .. } => Severity::Warn,
            LogEvent::FactGathered { result, .. } | LogEvent::ActionExecuted { result } => {
                result.severity()
            }
            LogEvent::ConfigurationDump { .. }
            | LogEvent::RuleChecked { .. }
            | LogEvent::Sleeping { .. } => Severity::Debug,
        }
    }

    /// The command result carried by fact, rule and action events.
    pub fn result(&self) -> Option<&CommandResult> {
        match self {
            LogEvent::FactGathered { result, .. }
            | LogEvent::RuleChecked { result }
            | LogEvent::ActionExecuted { result } => Some(result),
            _ => None,
        }
    }

    /// Send the event to the active `tracing` subscriber.
    pub fn emit(&self) {
        let severity = self.severity();
        match self {
            LogEvent::Starting { args } => at_level!(severity, %args, "starting"),
            LogEvent::ConfigurationHash { hash, previous } => {
                at_level!(severity, hash, previous = ?previous, "configuration hash")
            }
            LogEvent::ConfigurationLoaded { file, facts, actions, interval } => at_level!(
                severity,
                file = %file.display(),
                facts,
                actions,
                %interval,
                "configuration loaded"
            ),
            LogEvent::ConfigurationDump { config } => {
                at_level!(severity, %config, "configuration dump")
            }
            LogEvent::DuplicateFact { name, count } => {
                at_level!(severity, %name, count, "duplicate fact name")
            }
            LogEvent::FactGathered { name, result } => at_level!(
                severity,
                %name,
                command = %result.command,
                shell = %result.shell,
                dir = %result.dir.display(),
                rc = result.exit_code,
                stdout = %result.stdout,
                stderr = %result.stderr,
                error = %result.error_message(),
                "fact gathered"
            ),
            LogEvent::RuleChecked { result } => at_level!(
                severity,
                command = %result.command,
                dir = %result.dir.display(),
                rc = result.exit_code,
                stdout = %result.stdout,
                stderr = %result.stderr,
                error = %result.error_message(),
                "rule checked"
            ),
            LogEvent::ActionExecuted { result } => at_level!(
                severity,
                command = %result.command,
                dir = %result.dir.display(),
                rc = result.exit_code,
                stdout = %result.stdout,
                stderr = %result.stderr,
                error = %result.error_message(),
                "action executed"
            ),
            LogEvent::Sleeping { millis } => at_level!(severity, millis, "sleeping"),
        }
    }
}

/// Events recorded during one pass, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<LogEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the event and keep it.
    pub fn record(&mut self, event: LogEvent) {
        event.emit();
        self.events.push(event);
    }

    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.events.iter().map(LogEvent::tag).collect()
    }

    pub fn into_events(self) -> Vec<LogEvent> {
        self.events
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
