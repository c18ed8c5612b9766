// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to log the failure and flush logs first.

use crate::logging::LoggingError;
use std::fmt;
use yr_engine::EngineError;
use yr_runbook::RunbookError;

/// Kinds of fatal failure, each with a stable exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalKind {
    Unknown,
    IoError,
    ParseError,
    ValidationError,
    LogLevelError,
    OsError,
}

yr_core::simple_display! {
    FatalKind {
        Unknown => "Unknown",
        IoError => "IOError",
        ParseError => "ParseError",
        ValidationError => "ValidationError",
        LogLevelError => "LogLevelError",
        OsError => "OSError",
    }
}

impl FatalKind {
    pub fn code(self) -> u8 {
        match self {
            FatalKind::Unknown => 1,
            FatalKind::IoError => 64,
            FatalKind::ParseError => 65,
            FatalKind::ValidationError => 66,
            FatalKind::LogLevelError => 67,
            FatalKind::OsError => 68,
        }
    }
}

#[derive(Debug)]
pub struct ExitError {
    pub kind: FatalKind,
    pub message: String,
}

impl ExitError {
    pub fn new(kind: FatalKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn code(&self) -> u8 {
        self.kind.code()
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<EngineError> for ExitError {
    fn from(e: EngineError) -> Self {
        let kind = match &e {
            EngineError::Runbook(RunbookError::Io { .. }) => FatalKind::IoError,
            EngineError::Runbook(RunbookError::Parse { .. }) => FatalKind::ParseError,
            EngineError::Runbook(RunbookError::Validation { .. }) | EngineError::Interval(_) => {
                FatalKind::ValidationError
            }
            EngineError::Checksum(_) => FatalKind::Unknown,
        };
        Self::new(kind, e.to_string())
    }
}

impl From<LoggingError> for ExitError {
    fn from(e: LoggingError) -> Self {
        let kind = match &e {
            LoggingError::Open { .. } => FatalKind::IoError,
            LoggingError::Filter(_) => FatalKind::LogLevelError,
            LoggingError::Init(_) | LoggingError::Reload(_) => FatalKind::Unknown,
        };
        Self::new(kind, e.to_string())
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
