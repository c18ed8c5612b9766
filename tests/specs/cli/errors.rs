// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal errors: one tagged line on stderr and a stable exit status.

use crate::prelude::*;

#[test]
fn missing_runbook_is_io_error() {
    let project = Project::empty();
    project.cli().args(&["oneshot"]).fails_with(64).stderr_has("FATAL ERROR: IOError");
}

#[test]
fn malformed_runbook_is_parse_error() {
    let project = Project::with_runbook("facts: [\n");
    project.cli().args(&["oneshot"]).fails_with(65).stderr_has("FATAL ERROR: ParseError");
}

#[test]
fn unknown_level_is_parse_error() {
    let project = Project::with_runbook("logging:\n  level: loud\nactions:\n  - command: 'true'\n");
    project.cli().args(&["oneshot"]).fails_with(65);
}

#[test]
fn runbook_without_actions_is_validation_error() {
    let project = Project::with_runbook("facts:\n  - name: x\n    command: echo 1\n");
    project
        .cli()
        .args(&["oneshot"])
        .fails_with(66)
        .stderr_has("FATAL ERROR: ValidationError")
        .stderr_has("at least one action");
}

#[test]
fn empty_fact_command_is_validation_error() {
    let project = Project::with_runbook("facts:\n  - name: x\nactions:\n  - command: 'true'\n");
    project.cli().args(&["oneshot"]).fails_with(66).stderr_has("command is required");
}

#[test]
fn bad_interval_in_runbook_is_validation_error() {
    let project = Project::with_runbook("daemon:\n  interval: sometimes\nactions:\n  - command: 'true'\n");
    project.cli().args(&["daemon"]).fails_with(66);
}

#[test]
fn invalid_rust_log_is_log_level_error() {
    let project = Project::with_runbook("actions:\n  - command: 'true'\n");
    project
        .cli()
        .env("RUST_LOG", "yr=bogus")
        .args(&["oneshot"])
        .fails_with(67)
        .stderr_has("FATAL ERROR: LogLevelError");
}

#[test]
fn unwritable_log_file_is_io_error() {
    let project = Project::with_runbook("actions:\n  - command: 'true'\n");
    let log = project.join("missing/dir/yr.log");
    project
        .cli()
        .args(&["oneshot", "--log", log.to_str().unwrap()])
        .fails_with(64)
        .stderr_has("cannot open log file");
}

#[test]
fn fatal_errors_stay_off_stdout() {
    let project = Project::empty();
    project.cli().args(&["oneshot"]).fails_with(64).stdout_lacks("FATAL");
}
