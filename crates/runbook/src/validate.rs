// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runbook validation.
//!
//! Rule strings are shell commands and are never inspected here.

use std::collections::HashSet;
use std::fmt;
use yr_core::{parse_duration, Config};

/// A reason the runbook is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    EmptyFactName { index: usize },
    EmptyFactCommand { index: usize, name: String },
    NoActions,
    EmptyActionCommand { index: usize },
    InvalidInterval { value: String, message: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyFactName { index } => write!(f, "facts[{}]: name is required", index),
            Violation::EmptyFactCommand { index, name } => {
                write!(f, "facts[{}] '{}': command is required", index, name)
            }
            Violation::NoActions => write!(f, "actions: at least one action is required"),
            Violation::EmptyActionCommand { index } => {
                write!(f, "actions[{}]: command is required", index)
            }
            Violation::InvalidInterval { value, message } => {
                write!(f, "daemon.interval '{}': {}", value, message)
            }
        }
    }
}

/// Accepted but suspicious runbook content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunbookWarning {
    /// Several facts share a name; the last one gathered shadows the others.
    DuplicateFact { name: String, count: usize },
}

impl fmt::Display for RunbookWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunbookWarning::DuplicateFact { name, count } => {
                write!(f, "fact '{}' defined {} times; the last definition wins", name, count)
            }
        }
    }
}

/// Check a parsed runbook, collecting every violation.
pub fn validate_runbook(config: &Config) -> Result<Vec<RunbookWarning>, Vec<Violation>> {
    let mut violations = Vec::new();

    for (index, fact) in config.facts.iter().enumerate() {
        if fact.name.trim().is_empty() {
            violations.push(Violation::EmptyFactName { index });
        }
        if fact.command.trim().is_empty() {
            violations.push(Violation::EmptyFactCommand { index, name: fact.name.clone() });
        }
    }

    if config.actions.is_empty() {
        violations.push(Violation::NoActions);
    }
    for (index, action) in config.actions.iter().enumerate() {
        if action.command.trim().is_empty() {
            violations.push(Violation::EmptyActionCommand { index });
        }
    }

    if let Some(value) = config.interval_str() {
        if let Err(e) = parse_duration(value) {
            violations.push(Violation::InvalidInterval {
                value: value.to_string(),
                message: e.to_string(),
            });
        }
    }

    if violations.is_empty() {
        Ok(duplicate_facts(config))
    } else {
        Err(violations)
    }
}

fn duplicate_facts(config: &Config) -> Vec<RunbookWarning> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    for fact in &config.facts {
        if !seen.insert(fact.name.as_str()) {
            continue;
        }
        let count = config.facts.iter().filter(|f| f.name == fact.name).count();
        if count > 1 {
            warnings.push(RunbookWarning::DuplicateFact { name: fact.name.clone(), count });
        }
    }
    warnings
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
