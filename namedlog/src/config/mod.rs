//! Logging configuration.
//!
//! Settings come from the `[logging]` section of an ini file:
//!
//! ```ini
//! [logging]
//! level = info
//! naming = simple
//! directory = logs
//! file = app.log
//! ansi = false
//! ```
//!
//! Every key is optional and overlays [`LoggingConfig::default`].

mod parser;

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::identity::NamingStyle;

/// Default filter directive when neither the file nor `RUST_LOG` sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// Default log file name, used when a directory is configured.
pub const DEFAULT_LOG_FILE: &str = "namedlog.log";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse the ini file
    #[error("Failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Settings for logger naming and subscriber output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set
    pub level: String,
    /// How logger names are derived from type names
    pub naming: NamingStyle,
    /// Directory for the log file; `None` logs to stdout only
    pub directory: Option<PathBuf>,
    pub file_name: String,
    /// ANSI colors on stdout
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            naming: NamingStyle::default(),
            directory: None,
            file_name: DEFAULT_LOG_FILE.to_string(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        parser::parse_ini(&ini)
    }

    /// Parse configuration from ini text.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content).map_err(ini::Error::Parse)?;
        parser::parse_ini(&ini)
    }

    /// Full path of the log file, if file output is configured.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.directory.as_ref().map(|dir| dir.join(&self.file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.naming, NamingStyle::FullyQualified);
        assert_eq!(config.directory, None);
        assert_eq!(config.file_name, "namedlog.log");
        assert!(config.ansi);
        assert_eq!(config.log_path(), None);
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = LoggingConfig::load_from(&temp.path().join("absent.ini")).unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_load_from_file_overlays_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        fs::write(&path, "[logging]\nnaming = simple\ndirectory = logs\n").unwrap();

        let config = LoggingConfig::load_from(&path).unwrap();

        assert_eq!(config.naming, NamingStyle::Simple);
        assert_eq!(config.level, "info");
        assert_eq!(config.log_path(), Some(PathBuf::from("logs/namedlog.log")));
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let err = LoggingConfig::from_ini_str("[logging]\nnaming = camel\n").unwrap_err();
        match &err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "naming");
                assert_eq!(value, "camel");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Invalid configuration: logging.naming"));
    }
}
