//! INI parsing logic for converting `Ini` → `LoggingConfig`.
//!
//! The single place where ini key names map to struct fields.

use std::path::PathBuf;

use ini::Ini;
use tracing_subscriber::EnvFilter;

use super::{ConfigError, LoggingConfig};
use crate::log::LogLevel;

const SECTION: &str = "logging";

/// Parse an `Ini` object into a `LoggingConfig`.
///
/// Starts from `LoggingConfig::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<LoggingConfig, ConfigError> {
    let mut config = LoggingConfig::default();

    let Some(section) = ini.section(Some(SECTION)) else {
        return Ok(config);
    };

    if let Some(v) = section.get("level") {
        let v = v.trim();
        config.level = normalize_level(v).map_err(|reason| invalid("level", v, reason))?;
    }
    if let Some(v) = section.get("naming") {
        config.naming = v
            .parse()
            .map_err(|_| invalid("naming", v, "must be one of: fully_qualified, simple"))?;
    }
    if let Some(v) = section.get("directory") {
        let v = v.trim();
        if !v.is_empty() {
            config.directory = Some(PathBuf::from(v));
        }
    }
    if let Some(v) = section.get("file") {
        let v = v.trim();
        if v.is_empty() {
            return Err(invalid("file", v, "must not be empty"));
        }
        config.file_name = v.to_string();
    }
    if let Some(v) = section.get("ansi") {
        config.ansi = parse_bool(v).ok_or_else(|| invalid("ansi", v, "expected true or false"))?;
    }

    Ok(config)
}

/// Turn a configured level into a directive `EnvFilter` reads the same way.
///
/// Bare level names (including aliases like `warning`) and `off` are
/// rewritten to the lowercase spelling `EnvFilter` knows; anything else must
/// already be a valid `EnvFilter` directive list.
fn normalize_level(value: &str) -> Result<String, String> {
    if value.eq_ignore_ascii_case("off") {
        return Ok("off".to_string());
    }
    if let Ok(level) = value.parse::<LogLevel>() {
        return Ok(level.as_str().to_string());
    }
    EnvFilter::try_new(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        section: SECTION.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::NamingStyle;
    use tracing_subscriber::filter::LevelFilter;

    fn parse(content: &str) -> Result<LoggingConfig, ConfigError> {
        parse_ini(&Ini::load_from_str(content).unwrap())
    }

    #[test]
    fn test_empty_ini_gives_defaults() {
        assert_eq!(parse("").unwrap(), LoggingConfig::default());
        assert_eq!(
            parse("[other]\nlevel = debug\n").unwrap(),
            LoggingConfig::default()
        );
    }

    #[test]
    fn test_all_keys() {
        let config = parse(concat!(
            "[logging]\n",
            "level = debug\n",
            "naming = short\n",
            "directory = /var/log/app\n",
            "file = app.log\n",
            "ansi = no\n",
        ))
        .unwrap();

        assert_eq!(config.level, "debug");
        assert_eq!(config.naming, NamingStyle::Simple);
        assert_eq!(config.directory, Some(PathBuf::from("/var/log/app")));
        assert_eq!(config.file_name, "app.log");
        assert!(!config.ansi);
    }

    #[test]
    fn test_level_accepts_directives() {
        let config = parse("[logging]\nlevel = warn,namedlog=trace\n").unwrap();
        assert_eq!(config.level, "warn,namedlog=trace");
        assert_eq!(parse("[logging]\nlevel = OFF\n").unwrap().level, "off");
    }

    #[test]
    fn test_level_accepts_bare_target() {
        let config = parse("[logging]\nlevel = namedlog\n").unwrap();
        assert_eq!(config.level, "namedlog");
    }

    #[test]
    fn test_level_aliases_are_canonicalized() {
        let config = parse("[logging]\nlevel = Warning\n").unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(
            EnvFilter::new(&config.level).max_level_hint(),
            Some(LevelFilter::WARN)
        );

        let config = parse("[logging]\nlevel = DEBUG\n").unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(
            EnvFilter::new(&config.level).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_level_rejects_invalid_directive() {
        let err = parse("[logging]\nlevel = namedlog=loud\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "level"));
    }

    #[test]
    fn test_blank_directory_means_stdout_only() {
        let config = parse("[logging]\ndirectory =\n").unwrap();
        assert_eq!(config.directory, None);
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(parse("[logging]\nfile =\n").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert!(parse("[logging]\nansi = maybe\n").is_err());
    }
}
