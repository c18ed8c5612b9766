// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn yr_help_shows_usage_and_commands() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("oneshot").stdout_has("daemon");
}

#[test]
fn yr_help_lists_global_flags() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--config")
        .stdout_has("--interval")
        .stdout_has("--log")
        .stdout_has("--json")
        .stdout_has("--quiet")
        .stdout_has("--debug");
}

#[test]
fn yr_daemon_help_shows_usage() {
    cli().args(&["daemon", "--help"]).passes().stdout_has("Usage:");
}

#[test]
fn yr_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn yr_without_command_is_a_usage_error() {
    cli().fails_with(2).stderr_has("Usage:");
}

#[test]
fn yr_rejects_bad_interval() {
    cli().args(&["daemon", "--interval", "soon"]).fails_with(2).stderr_has("--interval");
}
