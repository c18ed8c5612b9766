// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_runbook(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_valid_runbook() {
    let file = write_runbook(
        r#"
facts:
  - name: load
    command: echo 3
actions:
  - command: echo high
    rules:
      - '[ "$load" -gt 2 ]'
"#,
    );

    let loaded = load_runbook_file(file.path()).unwrap();
    assert_eq!(loaded.config.facts.len(), 1);
    assert_eq!(loaded.config.actions[0].rules, vec![r#"[ "$load" -gt 2 ]"#.to_string()]);
    assert!(loaded.warnings.is_empty());
    assert_eq!(loaded.config.hash, 0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = load_runbook_file(&path).unwrap_err();
    assert!(matches!(err, RunbookError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read "));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let file = write_runbook("facts: [\n");
    let err = load_runbook_file(file.path()).unwrap_err();
    assert!(matches!(err, RunbookError::Parse { .. }));
}

#[test]
fn empty_file_fails_validation() {
    let file = write_runbook("");
    let err = load_runbook_file(file.path()).unwrap_err();
    match err {
        RunbookError::Validation { violations, .. } => {
            assert_eq!(violations, vec![crate::Violation::NoActions]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn validation_message_lists_violations() {
    let file = write_runbook("facts:\n  - name: x\nactions:\n  - command: ''\n");
    let err = load_runbook_file(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("facts[0] 'x': command is required"), "{message}");
    assert!(message.contains("; actions[0]: command is required"), "{message}");
}

#[test]
fn duplicate_facts_load_with_warning() {
    let file = write_runbook(
        "facts:\n  - {name: a, command: echo 1}\n  - {name: a, command: echo 2}\nactions:\n  - command: echo\n",
    );
    let loaded = load_runbook_file(file.path()).unwrap();
    assert_eq!(loaded.warnings.len(), 1);
}

#[test]
fn empty_interval_loads_as_unset() {
    let file = write_runbook("daemon:\n  interval: \"\"\nactions:\n  - command: echo ok\n");
    let loaded = load_runbook_file(file.path()).unwrap();
    assert_eq!(loaded.config.interval_str(), None);
}
