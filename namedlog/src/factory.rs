//! Logger factories.
//!
//! A [`LoggerFactory`] builds a logger for a name. It is the only way the
//! cache reaches the logging backend, so swapping the backend (or failing
//! on purpose in tests) means swapping the factory.

use std::sync::Arc;

use thiserror::Error;

use crate::log::{Logger, NoOpLogger, TracingLogger};

/// Errors raised while constructing a logger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The requested name is not acceptable to the backend
    #[error("Invalid logger name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The backend failed for another reason
    #[error("Logger backend error: {0}")]
    Backend(String),
}

/// Builds loggers by name.
///
/// Implementations must be `Send + Sync`; the cache calls them from whatever
/// thread missed.
pub trait LoggerFactory: Send + Sync {
    /// Create a new logger called `name`.
    fn create_logger(&self, name: &str) -> Result<Arc<dyn Logger>, FactoryError>;
}

impl<F> LoggerFactory for F
where
    F: Fn(&str) -> Result<Arc<dyn Logger>, FactoryError> + Send + Sync,
{
    fn create_logger(&self, name: &str) -> Result<Arc<dyn Logger>, FactoryError> {
        self(name)
    }
}

/// Factory producing [`TracingLogger`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLoggerFactory;

impl LoggerFactory for TracingLoggerFactory {
    fn create_logger(&self, name: &str) -> Result<Arc<dyn Logger>, FactoryError> {
        if name.trim().is_empty() {
            return Err(FactoryError::InvalidName {
                name: name.to_string(),
                reason: "logger names must not be blank".to_string(),
            });
        }
        Ok(Arc::new(TracingLogger::named(name)))
    }
}

/// Factory producing silent [`NoOpLogger`]s. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLoggerFactory;

impl LoggerFactory for NoOpLoggerFactory {
    fn create_logger(&self, name: &str) -> Result<Arc<dyn Logger>, FactoryError> {
        Ok(Arc::new(NoOpLogger::named(name)))
    }
}
