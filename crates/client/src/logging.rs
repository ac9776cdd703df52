//! Diagnostic logging setup.
//!
//! Narration goes to stdout; diagnostics go to stderr through a non-blocking
//! writer so they never interleave mid-line with the story.

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Level applied when `RUST_LOG` is unset or names no directives.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Build the filter for a `RUST_LOG`-style directive string.
///
/// Any directive given, including a bare level such as `debug`, takes
/// precedence over [`DEFAULT_LOG_LEVEL`]. Invalid directives are skipped.
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LOG_LEVEL.into())
        .parse_lossy(directives)
}

/// Install the global tracing subscriber.
///
/// The returned guard flushes buffered log lines when dropped; keep it alive
/// for the lifetime of the process.
pub fn setup_logging() -> Result<WorkerGuard> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directives))
        .with_writer(writer)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(guard)
}
