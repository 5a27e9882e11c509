//! No-operation logger implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// A named logger that discards all messages.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use namedlog::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger::named("quiet"));
/// logger.info(format_args!("This message is discarded"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoOpLogger {
    name: String,
}

impl NoOpLogger {
    /// Create a silent logger carrying `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for NoOpLogger {
    fn default() -> Self {
        Self::named("root")
    }
}

impl Logger for NoOpLogger {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}
