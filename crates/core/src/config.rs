// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effective configuration: defaults, file contents and command-line
//! overrides merged into one value, plus its change-detection checksum.

use crate::action::Action;
use crate::duration::{parse_duration, DurationError};
use crate::fact::Fact;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::time::Duration;

/// Interval between daemon passes when nothing overrides it.
pub const DEFAULT_INTERVAL: &str = "2s";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonSettings {
    /// Minimum time between the starts of two passes, e.g. `"30s"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Append log entries to this file in addition to the console
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Minimum level to log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    /// Suppress console output
    #[serde(default)]
    pub quiet: bool,
    /// Format entries as JSON
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub daemon: DaemonSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub facts: Vec<Fact>,
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Checksum of every other field; see [`Config::checksum`]
    #[serde(default, skip_deserializing)]
    pub hash: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    #[error("failed to serialize configuration for checksum: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Config {
    /// Compiled-in defaults, the base every effective configuration starts from.
    pub fn defaults() -> Self {
        Self {
            daemon: DaemonSettings { interval: Some(DEFAULT_INTERVAL.to_string()) },
            logging: LoggingSettings { level: Some(Severity::Info), ..Default::default() },
            ..Default::default()
        }
    }

    /// Merge `other` into `self`.
    ///
    /// Only non-empty scalars and `true` flags from `other` replace existing
    /// values, so a merge never resets a field. Facts and actions are appended.
    pub fn merge(&mut self, other: Config) {
        if let Some(interval) = other.daemon.interval.filter(|s| !s.trim().is_empty()) {
            self.daemon.interval = Some(interval);
        }

        if let Some(file) = other.logging.file.filter(|p| !p.as_os_str().is_empty()) {
            self.logging.file = Some(file);
        }
        if let Some(level) = other.logging.level {
            self.logging.level = Some(level);
        }
        if other.logging.quiet {
            self.logging.quiet = true;
        }
        if other.logging.json {
            self.logging.json = true;
        }

        self.facts.extend(other.facts);
        self.actions.extend(other.actions);
    }

    /// Daemon interval, falling back to [`DEFAULT_INTERVAL`] when unset or blank.
    pub fn interval(&self) -> Result<Duration, DurationError> {
        parse_duration(self.interval_str().unwrap_or(DEFAULT_INTERVAL))
    }

    /// The configured interval string, `None` when unset or blank.
    pub fn interval_str(&self) -> Option<&str> {
        self.daemon.interval.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn level(&self) -> Severity {
        self.logging.level.unwrap_or_default()
    }

    /// 32-bit checksum over the whole configuration except `hash` itself.
    ///
    /// Canonical JSON of the config with `hash` zeroed, SHA-256, first four
    /// bytes big-endian. Stable for equal configurations across runs.
    pub fn checksum(&self) -> Result<u32, ChecksumError> {
        let canonical = serde_json::to_vec(&Config { hash: 0, ..self.clone() })?;
        let digest = Sha256::digest(&canonical);
        Ok(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
    }

    /// Recompute and store the checksum.
    pub fn seal(mut self) -> Result<Self, ChecksumError> {
        self.hash = self.checksum()?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
