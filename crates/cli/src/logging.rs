// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log sink setup: console, optional file, text or JSON.

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::writer::{MakeWriter, MakeWriterExt};
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, reload, EnvFilter, Layer, Registry};
use yr_core::{LoggingSettings, Severity};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {env} filter: {0}", env = EnvFilter::DEFAULT_ENV)]
    Filter(#[from] ParseError),

    #[error("logging already initialised: {0}")]
    Init(#[from] TryInitError),

    #[error("cannot change log level: {0}")]
    Reload(#[from] reload::Error),
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;
type FilterHandle = reload::Handle<EnvFilter, Layered<Vec<BoxedLayer>, Registry>>;

/// Keeps the file writer flushing until dropped, and owns the level filter.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
    filter: FilterHandle,
    level: Severity,
    /// `RUST_LOG` was set; configured levels are ignored.
    pinned: bool,
}

impl LogGuard {
    /// Switch to the level in `settings` if it changed.
    ///
    /// Only the level is applied; the file and format stay as installed.
    pub fn apply(&mut self, settings: &LoggingSettings) -> Result<(), LoggingError> {
        let level = settings.level.unwrap_or_default();
        if self.pinned || level == self.level {
            return Ok(());
        }
        self.filter.reload(level_filter(level, None)?)?;
        tracing::info!(from = %self.level, to = %level, "log level changed");
        self.level = level;
        Ok(())
    }
}

/// Level filter from the configured level, or from `RUST_LOG` when set.
pub fn level_filter(level: Severity, env: Option<&str>) -> Result<EnvFilter, ParseError> {
    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_new(level.to_string()),
    }
}

/// Open a log file for appending, owner read/write only.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)
        .map_err(|source| LoggingError::Open { path: path.to_path_buf(), source })
}

/// Install the global subscriber.
///
/// Error events go to stderr and everything else to stdout. Quiet mode keeps
/// only error events on the console.
pub fn init(settings: &LoggingSettings) -> Result<LogGuard, LoggingError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    install(settings, env.as_deref())
}

/// Install the global subscriber ignoring `RUST_LOG`, for reporting a
/// failure to set up logging as configured.
pub fn init_fallback(settings: &LoggingSettings) -> Result<LogGuard, LoggingError> {
    install(settings, None)
}

fn install(settings: &LoggingSettings, env: Option<&str>) -> Result<LogGuard, LoggingError> {
    let level = settings.level.unwrap_or_default();
    let pinned = env.is_some_and(|s| !s.trim().is_empty());
    let (filter, handle) = reload::Layer::new(level_filter(level, env)?);

    let mut layers: Vec<BoxedLayer> = Vec::new();
    let errors = std::io::stderr.with_max_level(Level::ERROR);
    if settings.quiet {
        layers.push(console_layer(settings.json, errors));
    } else {
        layers.push(console_layer(settings.json, errors.or_else(std::io::stdout)));
    }

    let mut guard = None;
    if let Some(path) = settings.file.as_deref().filter(|p| !p.as_os_str().is_empty()) {
        let (writer, file_guard) = tracing_appender::non_blocking(open_log_file(path)?);
        guard = Some(file_guard);
        layers.push(if settings.json {
            fmt::layer().json().with_writer(writer).boxed()
        } else {
            fmt::layer().with_ansi(false).with_target(false).with_writer(writer).boxed()
        });
    }

    tracing_subscriber::registry().with(layers).with(filter).try_init()?;
    Ok(LogGuard { _file: guard, filter: handle, level, pinned })
}

fn console_layer<W>(json: bool, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_ansi(std::io::stdout().is_terminal())
            .with_target(false)
            .with_writer(writer)
            .boxed()
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
