// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rule evaluation.
//!
//! A rule is an opaque shell command; exit status 0 passes.

use crate::log::{EventLog, LogEvent};
use yr_adapters::CommandRunner;
use yr_core::{Action, CommandRequest, Environment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleVerdict {
    Passed,
    /// Evaluation stopped at this rule
    Failed { index: usize, rule: String },
}

impl RuleVerdict {
    pub fn passed(&self) -> bool {
        matches!(self, RuleVerdict::Passed)
    }
}

/// Evaluate an action's rules in order, stopping at the first failure.
///
/// Rules run under the runner's default shell with the derived environment;
/// the action's `shell` applies to its command only. Only the rules actually
/// run are logged. No rules means the action passes.
pub async fn check_rules<R>(
    runner: &R,
    action: &Action,
    env: &Environment,
    log: &mut EventLog,
) -> RuleVerdict
where
    R: CommandRunner + ?Sized,
{
    for (index, rule) in action.rules.iter().enumerate() {
        let request = CommandRequest::new(rule).env(env.clone());
        let result = runner.run(&request).await;
        let passed = result.passed();
        log.record(LogEvent::RuleChecked { result });
        if !passed {
            return RuleVerdict::Failed { index, rule: rule.clone() };
        }
    }
    RuleVerdict::Passed
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
