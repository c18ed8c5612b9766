// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actions: side-effecting commands gated by rule commands.

use serde::{Deserialize, Serialize};

/// A conditional command from the runbook.
///
/// Rules are opaque shell commands evaluated in order; exit status 0 passes.
/// An action without rules always runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub rules: Vec<String>,
    /// Interpreter override for the action and its rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

crate::builder! {
    pub struct ActionBuilder => Action {
        into {
            command: String = "true",
        }
        set {
            rules: Vec<String> = Vec::new(),
        }
        option {
            shell: String = None,
        }
    }
}

impl Action {
    pub fn is_unconditional(&self) -> bool {
        self.rules.is_empty()
    }
}
