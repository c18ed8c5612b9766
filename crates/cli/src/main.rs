// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! yr - gather facts, check rules, run actions

mod commands;
mod exit_error;
mod logging;

use clap::{Parser, Subcommand};
use exit_error::{ExitError, FatalKind};
use std::path::PathBuf;
use std::process::ExitCode;
use yr_adapters::ShellRunner;
use yr_core::{parse_duration, Config, DaemonSettings, LoggingSettings, Severity};
use yr_engine::Session;

#[derive(Parser)]
#[command(name = "yr", version, about = "Gather facts, check rules, run actions")]
struct Cli {
    /// Runbook file
    #[arg(short, long, global = true, default_value = "config.yaml")]
    config: PathBuf,

    /// Time between the starts of two passes, e.g. 30s or 1m30s
    #[arg(short, long, global = true, value_parser = parse_interval)]
    interval: Option<String>,

    /// Also append log entries to this file
    #[arg(long = "log", global = true, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Format log entries as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Only log errors to the console
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run a single pass and exit
    Oneshot,
    /// Run passes forever at the configured interval
    Daemon,
}

fn parse_interval(s: &str) -> Result<String, String> {
    parse_duration(s).map(|_| s.to_string()).map_err(|e| e.to_string())
}

impl Cli {
    /// Settings from the command line, merged over the runbook.
    fn overrides(&self) -> Config {
        Config {
            daemon: DaemonSettings { interval: self.interval.clone() },
            logging: LoggingSettings {
                file: self.log.clone(),
                level: self.debug.then_some(Severity::Debug),
                quiet: self.quiet,
                json: self.json,
            },
            ..Default::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let overrides = cli.overrides();

    let runner = match ShellRunner::new() {
        Ok(runner) => runner,
        Err(e) => {
            let _guard = logging::init_fallback(&fallback_logging(&overrides)).ok();
            return fatal(ExitError::new(FatalKind::OsError, format!("cannot resolve working directory: {}", e)));
        }
    };
    let session = Session::new(runner).with_args(std::env::args());

    // Sinks are configured once, from the first effective configuration.
    let loaded = session.load(&cli.config, &overrides);
    let settings = match &loaded {
        Ok(loaded) => loaded.config.logging.clone(),
        Err(_) => fallback_logging(&overrides),
    };
    let mut log_guard = match logging::init(&settings) {
        Ok(guard) => guard,
        Err(e) => {
            let _fallback = logging::init_fallback(&fallback_logging(&overrides)).ok();
            return fatal(e.into());
        }
    };

    let result = match loaded {
        Ok(loaded) => match cli.command {
            Command::Oneshot => commands::oneshot::run(session, &cli.config, loaded).await,
            Command::Daemon => {
                commands::daemon::run(session, cli.config.clone(), overrides, loaded, &mut log_guard).await
            }
        },
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fatal(e),
    }
}

/// Logging settings used when the runbook cannot be loaded.
fn fallback_logging(overrides: &Config) -> LoggingSettings {
    let mut config = Config::defaults();
    config.merge(overrides.clone());
    LoggingSettings { file: None, ..config.logging }
}

fn fatal(e: ExitError) -> ExitCode {
    tracing::error!("FATAL ERROR: {}", e);
    ExitCode::from(e.code())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
