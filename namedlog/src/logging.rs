//! Subscriber setup for the `tracing` backend.
//!
//! Loggers from [`TracingLoggerFactory`](crate::factory::TracingLoggerFactory)
//! only produce output once a subscriber is installed. [`init_logging`] installs
//! one from a [`LoggingConfig`]:
//! - Always prints to stdout
//! - Optionally writes to `<directory>/<file>` (cleared on start)
//! - `RUST_LOG` overrides the configured level

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log directory or file could not be prepared
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] io::Error),

    /// A global subscriber was already set
    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Whether a file writer is attached.
    pub fn has_file_output(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Install the global tracing subscriber described by `config`.
///
/// # Errors
///
/// Returns [`LoggingError::Io`] if the log directory cannot be created or the
/// log file cannot be cleared, and [`LoggingError::AlreadyInitialized`] if a
/// subscriber is already set for this process. In the latter case the log
/// file is left untouched.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    // The running subscriber may be writing to the same file
    if tracing::dispatcher::has_been_set() {
        return Err(LoggingError::AlreadyInitialized);
    }

    let (file_layer, file_guard) = match &config.directory {
        Some(dir) => {
            prepare_log_file(dir, &config.file_name)?;
            let appender = tracing_appender::rolling::never(dir, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .pretty();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(config.ansi);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok(LoggingGuard { file_guard })
}

/// Create `dir` if needed and truncate `dir/file`.
fn prepare_log_file(dir: &Path, file: &str) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(file), "")
}
