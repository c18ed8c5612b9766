// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! yr-core: Data model for the yr fact/rule/action runner

pub mod macros;

pub mod action;
pub mod command;
pub mod config;
pub mod duration;
pub mod fact;
pub mod severity;

pub use action::Action;
#[cfg(any(test, feature = "test-support"))]
pub use action::ActionBuilder;
pub use command::{
    trim_output, CommandRequest, CommandResult, Environment, ExecError, DEFAULT_SHELL,
    DEFAULT_TIMEOUT,
};
pub use config::{ChecksumError, Config, DaemonSettings, LoggingSettings, DEFAULT_INTERVAL};
pub use duration::{parse_duration, DurationError};
#[cfg(any(test, feature = "test-support"))]
pub use fact::FactBuilder;
pub use fact::{Fact, GatheredFact, GatheredFacts};
pub use severity::{classify, Severity, UnknownSeverity};
