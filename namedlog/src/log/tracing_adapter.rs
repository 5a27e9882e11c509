//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger implementation that delegates to the `tracing` crate.
///
/// Every event carries a `logger` field holding this logger's name, so
/// subscribers can filter or group output by the type that logged it.
///
/// # Example
///
/// ```
/// use namedlog::log::{Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Events are dropped unless a subscriber is installed
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger::named("app::Worker"));
/// logger.info(format_args!("Using tracing backend"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    /// Create a tracing logger adapter named `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::named("root")
    }
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        let logger = self.name.as_str();
        match level {
            LogLevel::Trace => tracing::trace!(logger, "{}", args),
            LogLevel::Debug => tracing::debug!(logger, "{}", args),
            LogLevel::Info => tracing::info!(logger, "{}", args),
            LogLevel::Warn => tracing::warn!(logger, "{}", args),
            LogLevel::Error => tracing::error!(logger, "{}", args),
        }
    }
}
