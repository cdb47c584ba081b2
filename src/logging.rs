//! Tracing subscriber setup.
//!
//! The interactive shell owns the terminal, so its log goes to a file in the
//! cache directory through a non-blocking appender. One-shot commands log to
//! stderr. `RUST_LOG` overrides the configured level in both cases.

use std::path::Path;

use anyhow::{anyhow, Context};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "file_explorer.log";

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to stderr at `level`.
pub fn init_stderr(level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("initializing logging: {}", e))
}

/// Log to `dir/file_explorer.log`. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init_file(dir: &Path, level: &str) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("initializing logging: {}", e))?;
    Ok(guard)
}
