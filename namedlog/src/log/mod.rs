//! Logging abstraction layer.
//!
//! Application code logs through the [`Logger`] trait instead of calling a
//! backend directly. Loggers are named; the name is normally the type that
//! asked for the logger (see [`crate::cache::LoggerCache`]).
//!
//! # Architecture
//!
//! - `Logger` trait: The interface that all components use for logging
//! - `TracingLogger`: Production adapter that delegates to the `tracing` crate
//! - `NoOpLogger`: Silent logger for testing and benchmarking
//!
//! # Usage
//!
//! ```
//! use namedlog::log::{Logger, NoOpLogger};
//! use namedlog::{log_debug, log_info};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn do_work(&self) {
//!         log_info!(self.logger, "Starting work");
//!         log_debug!(self.logger, "Work completed");
//!     }
//! }
//!
//! let component = MyComponent {
//!     logger: Arc::new(NoOpLogger::named("MyComponent")),
//! };
//! component.do_work();
//! ```

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger, ParseLevelError};
pub use tracing_adapter::TracingLogger;
