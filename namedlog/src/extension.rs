//! "Logger for this value" accessor.
//!
//! Import [`Logging`] and any value can ask for the logger named after its
//! type:
//!
//! ```
//! use namedlog::cache::LoggerCache;
//! use namedlog::extension::Logging;
//! use namedlog::factory::NoOpLoggerFactory;
//! use std::sync::Arc;
//!
//! struct Worker;
//!
//! impl Worker {
//!     fn run(&self, cache: &LoggerCache) -> Result<(), namedlog::cache::CacheError> {
//!         let logger = self.logger_from(cache)?;
//!         namedlog::log_info!(logger, "running");
//!         Ok(())
//!     }
//! }
//!
//! let cache = LoggerCache::new(Arc::new(NoOpLoggerFactory));
//! Worker.run(&cache)?;
//! # Ok::<(), namedlog::cache::CacheError>(())
//! ```
//!
//! [`Logging::logger`] goes through the process-wide cache, which the
//! application installs once at startup with [`install`].

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::cache::{CacheError, LoggerCache};
use crate::log::Logger;

/// Process-wide cache, set once by the application.
static INSTALLED: OnceLock<LoggerCache> = OnceLock::new();

/// Install `cache` as the process-wide logger cache.
///
/// # Errors
///
/// Returns [`CacheError::AlreadyInstalled`] if a cache was installed before;
/// the existing cache stays in place.
pub fn install(cache: LoggerCache) -> Result<&'static LoggerCache, CacheError> {
    let mut inserted = false;
    let current = INSTALLED.get_or_init(|| {
        inserted = true;
        cache
    });
    if !inserted {
        return Err(CacheError::AlreadyInstalled);
    }
    debug!(naming = %current.naming(), "Installed process-wide logger cache");
    Ok(current)
}

/// The process-wide logger cache, if one was installed.
pub fn installed() -> Option<&'static LoggerCache> {
    INSTALLED.get()
}

/// Loggers named after the implementing type.
///
/// Implemented for every `'static` type. The type used is the static type of
/// the receiver, so calling through `&dyn Trait` yields the `dyn Trait` logger.
pub trait Logging: 'static {
    /// Logger for this value's type from `cache`.
    fn logger_from(&self, cache: &LoggerCache) -> Result<Arc<dyn Logger>, CacheError> {
        cache.logger_for(self)
    }

    /// Logger for this value's type from the installed cache.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotInstalled`] before [`install`] has been called, or a
    /// factory failure from the cache.
    fn logger(&self) -> Result<Arc<dyn Logger>, CacheError> {
        installed()
            .ok_or(CacheError::NotInstalled)?
            .logger_for(self)
    }
}

impl<T: ?Sized + 'static> Logging for T {}
