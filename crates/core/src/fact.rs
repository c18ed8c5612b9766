// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Facts: named observations gathered by running a shell command.

use crate::command::{CommandResult, Environment};
use serde::{Deserialize, Serialize};

/// A named observation from the runbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub command: String,
    /// Interpreter override for this fact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

crate::builder! {
    pub struct FactBuilder => Fact {
        into {
            name: String = "uptime",
            command: String = "uptime",
        }
        option {
            shell: String = None,
        }
    }
}

/// A fact together with the result of its most recent gathering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatheredFact {
    pub fact: Fact,
    pub result: CommandResult,
}

impl GatheredFact {
    /// Whether this fact contributes to the derived environment.
    pub fn is_usable(&self) -> bool {
        self.result.passed() && !self.result.stdout.is_empty()
    }
}

/// Facts gathered during one pass, in configuration order.
///
/// Holds exactly one entry per configured fact. When two facts share a name
/// the later one shadows the earlier in [`GatheredFacts::get`] and in the
/// derived environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatheredFacts {
    entries: Vec<GatheredFact>,
}

impl GatheredFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, gathered: GatheredFact) {
        self.entries.push(gathered);
    }

    /// Look up the last gathered fact with this name.
    pub fn get(&self, name: &str) -> Option<&GatheredFact> {
        self.entries.iter().rev().find(|g| g.fact.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GatheredFact> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project the gathered facts onto environment variables.
    ///
    /// Only facts that exited 0 with non-empty stdout contribute; failed or
    /// silent facts are absent rather than empty. Duplicate names resolve to
    /// the last entry.
    pub fn to_environment(&self) -> Environment {
        let mut env = Environment::new();
        for gathered in &self.entries {
            if gathered.is_usable() {
                env.insert(gathered.fact.name.clone(), gathered.result.stdout.clone());
            } else {
                env.remove(&gathered.fact.name);
            }
        }
        env
    }
}

impl FromIterator<GatheredFact> for GatheredFacts {
    fn from_iter<I: IntoIterator<Item = GatheredFact>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
#[path = "fact_tests.rs"]
mod tests;
