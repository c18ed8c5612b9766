// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! yr-engine: Fact gathering, rule evaluation, action execution and the
//! scheduling loop

mod actions;
mod error;
mod facts;
mod log;
mod rules;
mod scheduler;
mod session;

pub use actions::{execute_actions, ActionOutcome};
pub use error::EngineError;
pub use facts::gather_facts;
pub use log::{EventLog, LogEvent};
pub use rules::{check_rules, RuleVerdict};
pub use scheduler::{remaining_interval, Scheduler};
pub use session::{PassReport, Session};
