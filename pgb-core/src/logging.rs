//! Structured logging setup using the `tracing` ecosystem.
//!
//! The client crates only emit events; installing a subscriber is left to the
//! embedding application, which can use one of the helpers below.

use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{PgbError, PgbResult};

/// Log file name prefix inside the log directory.
const LOG_FILE_PREFIX: &str = "pgb.log";

/// Initialize the global tracing subscriber with console and file output.
///
/// * `level` - filter directive, e.g. "info" or "pgb_api=debug"
/// * `log_dir` - directory for daily-rotated log files
/// * `json_output` - use JSON format for the file layer
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> PgbResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let result = if json_output {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    } else {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    };
    result.map_err(|e| PgbError::Config(format!("failed to install subscriber: {e}")))?;

    tracing::info!("logging initialized at level={level}, dir={}", log_dir.display());

    Ok(LogGuard { _guard: guard })
}

/// Keeps the non-blocking log writer alive. Drop to flush.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Initialize a console-only logger. Subsequent calls are no-ops.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).compact())
        .try_init();
}
