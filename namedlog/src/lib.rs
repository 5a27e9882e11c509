//! namedlog - loggers named after the type that asks for them
//!
//! A [`LoggerCache`](cache::LoggerCache) hands out one logger per Rust type,
//! built on first use by a [`LoggerFactory`](factory::LoggerFactory) and
//! reused afterwards. The [`Logging`](extension::Logging) trait lets any value
//! fetch the logger for its own type.
//!
//! ```
//! use namedlog::cache::LoggerCache;
//! use namedlog::config::LoggingConfig;
//! use namedlog::extension::Logging;
//! use namedlog::log_info;
//!
//! struct Worker;
//!
//! let cache = LoggerCache::from_config(&LoggingConfig::default());
//! let logger = Worker.logger_from(&cache)?;
//! assert!(logger.name().ends_with("Worker"));
//! log_info!(logger, "ready");
//! # Ok::<(), namedlog::cache::CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod extension;
pub mod factory;
pub mod identity;
pub mod log;
pub mod logging;

pub use cache::{CacheError, LoggerCache};
pub use extension::Logging;
pub use identity::{NamingStyle, TypeIdentity};

/// Version of the namedlog library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
