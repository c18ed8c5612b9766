// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! yr-adapters: Shell command execution for facts, rules and actions

pub mod subprocess;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use subprocess::{CommandRunner, ShellRunner};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRunner, Scripted};
