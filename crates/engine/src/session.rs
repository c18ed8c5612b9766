// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One pass of load, change detection, fact gathering and actions.

use crate::actions::{execute_actions, ActionOutcome};
use crate::error::EngineError;
use crate::facts::gather_facts;
use crate::log::{EventLog, LogEvent};
use std::path::Path;
use yr_adapters::CommandRunner;
use yr_core::{Config, GatheredFacts, DEFAULT_INTERVAL};
use yr_runbook::{load_runbook_file, Loaded, RunbookWarning};

/// Everything one pass did.
#[derive(Debug, Clone)]
pub struct PassReport {
    /// Effective configuration, sealed with its checksum
    pub config: Config,
    /// Whether the checksum differed from the previous pass
    pub config_changed: bool,
    pub facts: GatheredFacts,
    pub outcomes: Vec<ActionOutcome>,
    pub events: Vec<LogEvent>,
}

impl PassReport {
    pub fn tags(&self) -> Vec<&'static str> {
        self.events.iter().map(LogEvent::tag).collect()
    }

    pub fn executed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_executed()).count()
    }
}

/// Long-lived engine state shared by every pass of one process.
pub struct Session<R> {
    runner: R,
    args: String,
    started: bool,
    last_checksum: Option<u32>,
}

impl<R: CommandRunner> Session<R> {
    pub fn new(runner: R) -> Self {
        Self { runner, args: String::new(), started: false, last_checksum: None }
    }

    /// Process arguments reported by the `starting` event.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args = args.into_iter().map(|a| a.as_ref().to_string()).collect::<Vec<_>>().join(" ");
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn last_checksum(&self) -> Option<u32> {
        self.last_checksum
    }

    /// Build the effective configuration: defaults, then the file, then
    /// `overrides`. The result is sealed with its checksum.
    pub fn load(&self, path: &Path, overrides: &Config) -> Result<Loaded, EngineError> {
        let Loaded { config: file, warnings } = load_runbook_file(path)?;

        let mut config = Config::defaults();
        config.merge(file);
        config.merge(overrides.clone());
        config.interval()?;

        Ok(Loaded { config: config.seal()?, warnings })
    }

    /// Run one pass over an effective configuration.
    pub async fn execute(&mut self, source: &Path, loaded: Loaded) -> PassReport {
        let Loaded { config, warnings } = loaded;
        let mut log = EventLog::new();

        if !self.started {
            log.record(LogEvent::Starting { args: self.args.clone() });
            self.started = true;
        }

        let config_changed = self.last_checksum != Some(config.hash);
        if config_changed {
            self.announce(source, &config, &warnings, &mut log);
            self.last_checksum = Some(config.hash);
        }

        let facts = gather_facts(&self.runner, &config.facts, &mut log).await;
        let env = facts.to_environment();
        let outcomes = execute_actions(&self.runner, &config.actions, &env, &mut log).await;

        PassReport { config, config_changed, facts, outcomes, events: log.into_events() }
    }

    /// Load the runbook at `path` and run one pass over it.
    pub async fn run_once(&mut self, path: &Path, overrides: &Config) -> Result<PassReport, EngineError> {
        let loaded = self.load(path, overrides)?;
        Ok(self.execute(path, loaded).await)
    }

    fn announce(&self, source: &Path, config: &Config, warnings: &[RunbookWarning], log: &mut EventLog) {
        log.record(LogEvent::ConfigurationHash { hash: config.hash, previous: self.last_checksum });
        log.record(LogEvent::ConfigurationLoaded {
            file: source.to_path_buf(),
            facts: config.facts.len(),
            actions: config.actions.len(),
            interval: config.interval_str().unwrap_or(DEFAULT_INTERVAL).to_string(),
        });
        let dump = serde_json::to_string(config).unwrap_or_else(|e| format!("<unavailable: {}>", e));
        log.record(LogEvent::ConfigurationDump { config: dump });
        for warning in warnings {
            let RunbookWarning::DuplicateFact { name, count } = warning;
            log.record(LogEvent::DuplicateFact { name: name.clone(), count: *count });
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
