// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fact gathering.

use crate::log::{EventLog, LogEvent};
use yr_adapters::CommandRunner;
use yr_core::{CommandRequest, Fact, GatheredFact, GatheredFacts};

/// Run every fact command in order, one result per fact.
///
/// Facts run without injected environment. Failures are recorded, not
/// returned: a failed fact is simply left out of the derived environment.
pub async fn gather_facts<R>(runner: &R, facts: &[Fact], log: &mut EventLog) -> GatheredFacts
where
    R: CommandRunner + ?Sized,
{
    let mut gathered = GatheredFacts::new();
    for fact in facts {
        let request = CommandRequest::new(&fact.command).shell_override(fact.shell.as_deref());
        let result = runner.run(&request).await;
        log.record(LogEvent::FactGathered { name: fact.name.clone(), result: result.clone() });
        gathered.push(GatheredFact { fact: fact.clone(), result });
    }
    gathered
}

#[cfg(test)]
#[path = "facts_tests.rs"]
mod tests;
