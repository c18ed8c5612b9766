// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::command::{ExecError, DEFAULT_SHELL, DEFAULT_TIMEOUT};
use std::path::PathBuf;

fn gathered(name: &str, stdout: &str, exit_code: i32) -> GatheredFact {
    gathered_with(name, stdout, exit_code, None)
}

fn gathered_with(
    name: &str,
    stdout: &str,
    exit_code: i32,
    error: Option<ExecError>,
) -> GatheredFact {
    let fact = Fact::builder().name(name).command(format!("echo {stdout}")).build();
    GatheredFact {
        result: CommandResult {
            command: fact.command.clone(),
            shell: DEFAULT_SHELL.to_string(),
            dir: PathBuf::from("/"),
            timeout: DEFAULT_TIMEOUT,
            env: Environment::new(),
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code,
            error,
        },
        fact,
    }
}

#[test]
fn successful_facts_become_environment() {
    let facts: GatheredFacts =
        [gathered("loadAverage1", "20", 0), gathered("apacheIsRunning", "0", 0)]
            .into_iter()
            .collect();

    let env = facts.to_environment();
    assert_eq!(env.len(), 2);
    assert_eq!(env["loadAverage1"], "20");
    assert_eq!(env["apacheIsRunning"], "0");
}

#[yare::parameterized(
    non_zero_exit = { "20", 1 },
    empty_stdout  = { "", 0 },
    both          = { "", 2 },
)]
fn unusable_facts_are_absent(stdout: &str, exit_code: i32) {
    let facts: GatheredFacts = [gathered("broken", stdout, exit_code)].into_iter().collect();
    assert!(!facts.to_environment().contains_key("broken"));
}

#[test]
fn timed_out_fact_is_absent() {
    let error = ExecError::Timeout { timeout: DEFAULT_TIMEOUT };
    let facts: GatheredFacts =
        [gathered_with("slow", "partial", -1, Some(error))].into_iter().collect();
    assert!(facts.to_environment().is_empty());
}

#[test]
fn duplicate_names_last_wins() {
    let facts: GatheredFacts =
        [gathered("load", "1", 0), gathered("load", "2", 0)].into_iter().collect();

    assert_eq!(facts.len(), 2);
    assert_eq!(facts.get("load").unwrap().result.stdout, "2");
    assert_eq!(facts.to_environment()["load"], "2");
}

#[test]
fn failed_duplicate_shadows_earlier_success() {
    let facts: GatheredFacts =
        [gathered("load", "1", 0), gathered("load", "", 1)].into_iter().collect();
    assert!(!facts.to_environment().contains_key("load"));
}

#[test]
fn keeps_configuration_order() {
    let mut facts = GatheredFacts::new();
    assert!(facts.is_empty());
    facts.push(gathered("b", "1", 0));
    facts.push(gathered("a", "2", 0));

    let names: Vec<_> = facts.iter().map(|g| g.fact.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn fact_deserializes_without_shell() {
    let fact: Fact = serde_json::from_str(r#"{"name":"n","command":"c"}"#).unwrap();
    assert_eq!(fact, Fact::builder().name("n").command("c").build());
}
