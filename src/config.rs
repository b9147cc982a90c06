//! Runtime configuration
//!
//! Settings are read from a TOML document. The defaults ship inside the
//! binary (`polylinekit.toml`) and can be replaced with `--config FILE`.

use std::fs;
use std::str::FromStr;
use lazy_static::lazy_static;
use log::LevelFilter;

use crate::polyline::errors::{PolylineError, PolylineResult};

lazy_static! {
    // Parse the bundled defaults once
    static ref DEFAULT_CONFIG: PolylineConfig = {
        let content = include_str!("../polylinekit.toml");
        PolylineConfig::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse default configuration: {}", e);
            PolylineConfig::fallback()
        })
    };
}

/// Settings that control the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineConfig {
    /// File receiving the operation records of each command
    pub log_file: Option<String>,
    /// File backing the global `log` output; `None` logs to stderr through env_logger
    pub global_log_file: Option<String>,
    /// Most verbose log level
    pub log_level: LevelFilter,
}

impl PolylineConfig {
    /// The bundled default configuration
    pub fn defaults() -> Self {
        DEFAULT_CONFIG.clone()
    }

    fn fallback() -> Self {
        PolylineConfig {
            log_file: None,
            global_log_file: None,
            log_level: LevelFilter::Info,
        }
    }

    /// Parse a configuration from a TOML string
    ///
    /// Keys missing from `content` keep their fallback values.
    pub fn from_str(content: &str) -> PolylineResult<Self> {
        let toml_table: toml::Table = content.parse()
            .map_err(|e| PolylineError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = PolylineConfig::fallback();

        if let Some(logging) = toml_table.get("logging").and_then(|v| v.as_table()) {
            config.log_file = Self::optional_string(logging, "file")?;
            config.global_log_file = Self::optional_string(logging, "global_file")?;

            if let Some(level) = logging.get("level") {
                let level = level.as_str()
                    .ok_or_else(|| PolylineError::ConfigError("logging.level must be a string".to_string()))?;
                config.log_level = LevelFilter::from_str(level)
                    .map_err(|_| PolylineError::ConfigError(format!("Unknown log level: {}", level)))?;
            }
        }

        Ok(config)
    }

    /// Helper to read an optional string key from a table
    fn optional_string(table: &toml::Table, key: &str) -> PolylineResult<Option<String>> {
        match table.get(key) {
            Some(value) => value.as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| PolylineError::ConfigError(format!("logging.{} must be a string", key))),
            None => Ok(None),
        }
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> PolylineResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }
}
