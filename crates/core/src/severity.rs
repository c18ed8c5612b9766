// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log severity and the shared outcome classifier.

use crate::command::ExecError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity of a log event, also used as the minimum logging level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

crate::simple_display! {
    Severity {
        Debug => "debug",
        Info => "info",
        Warn => "warn",
        Error => "error",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level `{0}` (expected debug, info, warn or error)")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Classify the outcome of a command for logging.
///
/// `Error` when the command could not be run to completion, `Warn` when it
/// wrote anything to stderr (even with exit code 0), `Debug` otherwise.
/// Exit codes do not participate.
pub fn classify(error: Option<&ExecError>, stderr: &str) -> Severity {
    match (error, stderr.is_empty()) {
        (Some(_), _) => Severity::Error,
        (None, false) => Severity::Warn,
        (None, true) => Severity::Debug,
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
