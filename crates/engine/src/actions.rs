// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional action execution.

use crate::log::{EventLog, LogEvent};
use crate::rules::{check_rules, RuleVerdict};
use yr_adapters::CommandRunner;
use yr_core::{Action, CommandRequest, CommandResult, Environment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Executed(CommandResult),
    /// A rule failed; the action command did not run
    Skipped { index: usize, rule: String },
}

impl ActionOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, ActionOutcome::Executed(_))
    }

    pub fn result(&self) -> Option<&CommandResult> {
        match self {
            ActionOutcome::Executed(result) => Some(result),
            ActionOutcome::Skipped { .. } => None,
        }
    }
}

/// Evaluate and run actions in order, one outcome per action.
///
/// A failing action never stops the ones after it. Skipped actions are
/// not logged.
pub async fn execute_actions<R>(
    runner: &R,
    actions: &[Action],
    env: &Environment,
    log: &mut EventLog,
) -> Vec<ActionOutcome>
where
    R: CommandRunner + ?Sized,
{
    let mut outcomes = Vec::with_capacity(actions.len());
    for action in actions {
        if let RuleVerdict::Failed { index, rule } = check_rules(runner, action, env, log).await {
            outcomes.push(ActionOutcome::Skipped { index, rule });
            continue;
        }

        let request = CommandRequest::new(&action.command)
            .shell_override(action.shell.as_deref())
            .env(env.clone());
        let result = runner.run(&request).await;
        log.record(LogEvent::ActionExecuted { result: result.clone() });
        outcomes.push(ActionOutcome::Executed(result));
    }
    outcomes
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
