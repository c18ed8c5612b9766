// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `yr oneshot` - run a single pass

use crate::exit_error::ExitError;
use std::path::Path;
use yr_adapters::CommandRunner;
use yr_engine::Session;
use yr_runbook::Loaded;

/// Run one pass over an already loaded runbook.
///
/// Command failures are logged, never fatal.
pub async fn run<R: CommandRunner>(
    mut session: Session<R>,
    path: &Path,
    loaded: Loaded,
) -> Result<(), ExitError> {
    let report = session.execute(path, loaded).await;
    tracing::debug!(
        facts = report.facts.len(),
        executed = report.executed(),
        skipped = report.outcomes.len() - report.executed(),
        "pass complete"
    );
    Ok(())
}
