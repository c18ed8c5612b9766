// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read, parse and validate a runbook file.

use crate::error::RunbookError;
use crate::parser::parse_runbook;
use crate::validate::{validate_runbook, RunbookWarning};
use std::path::Path;
use yr_core::Config;

/// A validated runbook and any warnings raised while checking it.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub config: Config,
    pub warnings: Vec<RunbookWarning>,
}

/// Load a runbook from disk.
///
/// The returned config holds only what the file says; defaults and
/// command-line overrides are merged by the caller.
pub fn load_runbook_file(path: &Path) -> Result<Loaded, RunbookError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| RunbookError::Io { path: path.to_path_buf(), source })?;

    let config = parse_runbook(&content)
        .map_err(|source| RunbookError::Parse { path: path.to_path_buf(), source })?;

    let warnings = validate_runbook(&config)
        .map_err(|violations| RunbookError::Validation { path: path.to_path_buf(), violations })?;

    Ok(Loaded { config, warnings })
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
