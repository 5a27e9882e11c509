//! Per-type logger cache.
//!
//! [`LoggerCache`] maps a [`TypeIdentity`] to the logger built for it. The
//! first lookup for a type asks the [`LoggerFactory`] for a logger named
//! after the type; later lookups return the same `Arc` without touching the
//! factory.
//!
//! # Thread Safety
//!
//! - Entries live in a `DashMap` (concurrent reads, per-shard write locks)
//! - The factory runs with no shard lock held
//! - Two threads missing on the same type may both call the factory; the
//!   first insert wins and both threads get the winning logger
//!
//! # Example
//!
//! ```
//! use namedlog::cache::LoggerCache;
//! use namedlog::factory::NoOpLoggerFactory;
//! use std::sync::Arc;
//!
//! struct Worker;
//!
//! let cache = LoggerCache::new(Arc::new(NoOpLoggerFactory));
//! let first = cache.logger_for(&Worker)?;
//! let second = cache.get_for::<Worker>()?;
//! assert!(Arc::ptr_eq(&first, &second));
//! # Ok::<(), namedlog::cache::CacheError>(())
//! ```

mod stats;

use std::fmt;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;

use crate::config::LoggingConfig;
use crate::factory::{FactoryError, LoggerFactory, TracingLoggerFactory};
use crate::identity::{NamingStyle, TypeIdentity};
use crate::log::Logger;

pub use stats::CacheStats;
use stats::StatsCounters;

/// Errors surfaced when obtaining a logger.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The factory could not build a logger; nothing was cached
    #[error("Failed to create logger for {type_name}: {source}")]
    Factory {
        type_name: &'static str,
        #[source]
        source: FactoryError,
    },

    /// No process-wide cache has been installed
    #[error("No logger cache installed; call namedlog::extension::install first")]
    NotInstalled,

    /// A process-wide cache is already installed
    #[error("A logger cache is already installed")]
    AlreadyInstalled,
}

/// Cache of loggers keyed by type.
pub struct LoggerCache {
    factory: Arc<dyn LoggerFactory>,
    naming: NamingStyle,
    loggers: DashMap<TypeIdentity, Arc<dyn Logger>>,
    stats: StatsCounters,
}

impl LoggerCache {
    /// Create an empty cache using fully qualified logger names.
    pub fn new(factory: Arc<dyn LoggerFactory>) -> Self {
        Self::with_naming(factory, NamingStyle::default())
    }

    /// Create an empty cache deriving logger names with `naming`.
    pub fn with_naming(factory: Arc<dyn LoggerFactory>, naming: NamingStyle) -> Self {
        Self {
            factory,
            naming,
            loggers: DashMap::new(),
            stats: StatsCounters::default(),
        }
    }

    /// Create an empty cache backed by `tracing`, named per `config`.
    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::with_naming(Arc::new(TracingLoggerFactory), config.naming)
    }

    /// Get the logger for `identity`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Factory`] if the factory fails. The failure is
    /// not cached; the next lookup calls the factory again.
    pub fn get(&self, identity: TypeIdentity) -> Result<Arc<dyn Logger>, CacheError> {
        if let Some(entry) = self.loggers.get(&identity) {
            self.stats.record_hit();
            return Ok(Arc::clone(entry.value()));
        }

        self.stats.record_miss();
        let name = identity.logger_name(self.naming);
        let created = self.factory.create_logger(&name).map_err(|source| {
            self.stats.record_factory_failure();
            debug!(
                type_name = identity.name(),
                logger = %name,
                error = %source,
                "Logger factory failed"
            );
            CacheError::Factory {
                type_name: identity.name(),
                source,
            }
        })?;

        let logger = match self.loggers.entry(identity) {
            Entry::Occupied(entry) => {
                // Another thread filled the slot while the factory ran
                debug!(
                    type_name = identity.name(),
                    "Discarding logger that lost insert race"
                );
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                // No map-wide calls (len, iter) here: the entry holds a shard lock
                debug!(type_name = identity.name(), logger = %name, "Cached new logger");
                Arc::clone(entry.insert(created).value())
            }
        };
        Ok(logger)
    }

    /// Get the logger for type `T`.
    pub fn get_for<T: ?Sized + 'static>(&self) -> Result<Arc<dyn Logger>, CacheError> {
        self.get(TypeIdentity::of::<T>())
    }

    /// Get the logger for the type of `value`.
    pub fn logger_for<T: ?Sized + 'static>(
        &self,
        value: &T,
    ) -> Result<Arc<dyn Logger>, CacheError> {
        self.get(TypeIdentity::of_val(value))
    }

    /// Whether a logger is cached for `identity`.
    pub fn contains(&self, identity: TypeIdentity) -> bool {
        self.loggers.contains_key(&identity)
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Drop every cached logger.
    ///
    /// Loggers already handed out keep working; the next lookup per type
    /// calls the factory again.
    pub fn clear(&self) {
        self.loggers.clear();
    }

    pub fn naming(&self) -> NamingStyle {
        self.naming
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.loggers.len())
    }
}

impl fmt::Debug for LoggerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerCache")
            .field("naming", &self.naming)
            .field("entries", &self.loggers.len())
            .finish_non_exhaustive()
    }
}
