// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! yr-runbook: YAML runbook parsing, validation and loading

mod error;
mod load;
mod parser;
mod validate;

pub use error::RunbookError;
pub use load::{load_runbook_file, Loaded};
pub use parser::parse_runbook;
pub use validate::{validate_runbook, RunbookWarning, Violation};
