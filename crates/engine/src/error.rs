// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;
use yr_core::{ChecksumError, DurationError};
use yr_runbook::RunbookError;

/// Errors that end a pass before any command runs.
///
/// Command failures never appear here; they are recorded on each
/// `CommandResult`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Runbook(#[from] RunbookError),

    #[error(transparent)]
    Checksum(#[from] ChecksumError),

    #[error("invalid interval: {0}")]
    Interval(#[from] DurationError),
}
