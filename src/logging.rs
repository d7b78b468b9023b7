//! Logging setup.
//!
//! The alternate screen belongs to the UI, so diagnostics go to a file
//! (or nowhere). Level selection follows `CHECKLIST_LOG`, falling back
//! to `info` (`debug` with `--verbose`).

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable read for the log filter directive.
pub const LOG_ENV: &str = "CHECKLIST_LOG";

/// Install the global tracing subscriber writing to `log_file`.
pub fn init(log_file: &Path, verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
