// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! YAML runbook parsing.

use yr_core::Config;

/// Parse runbook YAML into an (unvalidated) configuration.
///
/// Empty documents, including comment-only ones, parse to an empty config.
/// Unknown keys are ignored.
pub fn parse_runbook(content: &str) -> Result<Config, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let parsed: Option<Config> = serde_yaml::from_str(content)?;
    Ok(parsed.unwrap_or_default())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
