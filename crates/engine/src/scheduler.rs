// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-interval scheduling loop.

use crate::error::EngineError;
use crate::log::LogEvent;
use crate::session::{PassReport, Session};
use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;
use yr_adapters::CommandRunner;
use yr_core::Config;
use yr_runbook::Loaded;

/// Time left to wait after a pass that took `elapsed`.
///
/// `None` when the pass used up the whole interval: the next pass starts
/// immediately and missed ticks are not made up.
pub fn remaining_interval(interval: Duration, elapsed: Duration) -> Option<Duration> {
    interval.checked_sub(elapsed).filter(|d| !d.is_zero())
}

/// Repeats passes, spacing their starts by the configured interval.
///
/// The interval is read from each pass's effective configuration, so a
/// change in the runbook applies from the following wait.
pub struct Scheduler<R> {
    session: Session<R>,
    path: PathBuf,
    overrides: Config,
}

impl<R: CommandRunner> Scheduler<R> {
    pub fn new(session: Session<R>, path: impl Into<PathBuf>, overrides: Config) -> Self {
        Self { session, path: path.into(), overrides }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Run one pass, then sleep out the rest of the interval.
    pub async fn tick(&mut self) -> Result<PassReport, EngineError> {
        let started = Instant::now();
        let loaded = self.session.load(&self.path, &self.overrides)?;
        self.finish(started, loaded).await
    }

    /// Like [`Scheduler::tick`], over a configuration that is already loaded.
    pub async fn tick_loaded(&mut self, loaded: Loaded) -> Result<PassReport, EngineError> {
        self.finish(Instant::now(), loaded).await
    }

    async fn finish(&mut self, started: Instant, loaded: Loaded) -> Result<PassReport, EngineError> {
        let mut report = self.session.execute(&self.path, loaded).await;
        let interval = report.config.interval()?;

        if let Some(wait) = remaining_interval(interval, started.elapsed()) {
            let event = LogEvent::Sleeping { millis: u64::try_from(wait.as_millis()).unwrap_or(u64::MAX) };
            event.emit();
            report.events.push(event);
            tokio::time::sleep(wait).await;
        }
        Ok(report)
    }

    /// Tick forever. Returns only when a pass cannot be loaded.
    pub async fn run(&mut self) -> Result<Infallible, EngineError> {
        loop {
            self.tick().await?;
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
