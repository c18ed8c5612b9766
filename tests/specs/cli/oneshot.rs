// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `yr oneshot` specs: one pass over a runbook, logged to the console.

use crate::prelude::*;

const RUNBOOK: &str = r#"
facts:
  - name: answer
    command: echo 42
  - name: broken
    command: exit 1
actions:
  - command: echo "answer is $answer"
    rules:
      - test "$answer" -eq 42
      - test -z "$broken"
  - command: echo "never printed"
    rules:
      - test "$answer" -lt 10
"#;

#[test]
fn oneshot_runs_a_pass_and_exits_zero() {
    let project = Project::with_runbook(RUNBOOK);
    project
        .cli()
        .args(&["oneshot", "--debug"])
        .passes()
        .stdout_has("starting")
        .stdout_has("configuration loaded")
        .stdout_has("fact gathered")
        .stdout_has("rule checked")
        .stdout_has("action executed")
        .stdout_has("answer is 42")
        .stdout_lacks("never printed");
}

#[test]
fn oneshot_at_info_hides_debug_events() {
    let project = Project::with_runbook(RUNBOOK);
    project
        .cli()
        .args(&["oneshot"])
        .passes()
        .stdout_has("configuration loaded")
        .stdout_lacks("fact gathered")
        .stdout_lacks("action executed");
}

#[test]
fn runbook_level_is_honoured() {
    let project = Project::with_runbook(&format!("logging:\n  level: debug\n{}", RUNBOOK));
    project.cli().args(&["oneshot"]).passes().stdout_has("fact gathered");
}

#[test]
fn config_flag_selects_runbook() {
    let project = Project::empty();
    project.file("etc/runbook.yaml", "actions:\n  - command: echo from-flag\n");
    let path = project.join("etc/runbook.yaml");

    project
        .cli()
        .args(&["--config", path.to_str().unwrap(), "--debug", "oneshot"])
        .passes()
        .stdout_has("from-flag");
}

#[test]
fn json_flag_formats_entries_as_json() {
    let project = Project::with_runbook(RUNBOOK);
    let out = project.cli().args(&["oneshot", "--json"]).passes();
    let line = out.stdout.lines().find(|l| l.contains("configuration loaded")).unwrap();
    assert!(line.trim_start().starts_with('{'), "{}", line);
}

#[test]
fn quiet_flag_silences_console() {
    let project = Project::with_runbook(RUNBOOK);
    let out = project.cli().args(&["oneshot", "--quiet", "--debug"]).passes();
    assert!(out.stdout.is_empty(), "{}", out);
}

#[test]
fn log_flag_appends_to_file() {
    let project = Project::with_runbook(RUNBOOK);
    let log = project.join("yr.log");

    project.cli().args(&["oneshot", "--quiet", "--debug", "--log", log.to_str().unwrap()]).passes();
    project.cli().args(&["oneshot", "--quiet", "--debug", "--log", log.to_str().unwrap()]).passes();

    let content = project.read("yr.log");
    assert_eq!(content.matches("starting").count(), 2, "{}", content);
    assert!(content.contains("answer is 42"), "{}", content);
}

#[test]
fn stderr_from_an_action_is_a_warning() {
    let project = Project::with_runbook("actions:\n  - command: echo careful >&2\n");
    project.cli().args(&["oneshot"]).passes().stdout_has("WARN").stdout_has("careful");
}

#[test]
fn failing_action_does_not_fail_the_run() {
    let project = Project::with_runbook("actions:\n  - command: exit 9\n  - command: echo after\n");
    project.cli().args(&["oneshot", "--debug"]).passes().stdout_has("after");
}
