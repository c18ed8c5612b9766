// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runbook loading errors.

use crate::validate::Violation;
use std::path::PathBuf;
use thiserror::Error;

/// Why a runbook could not be turned into a configuration.
///
/// Loading is all-or-nothing: callers never see a partially valid runbook.
#[derive(Debug, Error)]
pub enum RunbookError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid runbook {}: {}", path.display(), join(violations))]
    Validation { path: PathBuf, violations: Vec<Violation> },
}

fn join(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
