// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `yr daemon` - run passes forever

use crate::exit_error::ExitError;
use crate::logging::LogGuard;
use std::path::PathBuf;
use yr_adapters::CommandRunner;
use yr_core::Config;
use yr_engine::{Scheduler, Session};
use yr_runbook::Loaded;

/// Run the scheduling loop until a pass cannot be loaded.
///
/// The first pass runs over `first`; later passes re-read the runbook. The
/// log level of each pass's configuration applies from the next pass. The
/// process is normally stopped by a signal.
pub async fn run<R: CommandRunner>(
    session: Session<R>,
    path: PathBuf,
    overrides: Config,
    first: Loaded,
    logging: &mut LogGuard,
) -> Result<(), ExitError> {
    let mut scheduler = Scheduler::new(session, path, overrides);
    let mut report = scheduler.tick_loaded(first).await?;
    loop {
        if let Err(e) = logging.apply(&report.config.logging) {
            tracing::warn!(error = %e, "keeping current log level");
        }
        report = scheduler.tick().await?;
    }
}
