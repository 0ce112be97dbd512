//! Configuration loading and config file resolution
//!
//! Bootstrap settings live in a small TOML file. Resolution of the file path
//! follows this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`LECTORIUM_CONFIG`)
//! 3. Per-user config directory (`<config_dir>/lectorium/inbox.toml`)
//!
//! A missing or unreadable config file is never fatal: the resolver logs a
//! warning and falls back to built-in defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "LECTORIUM_CONFIG";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    /// Reference dictionary export (authors, locations, sources)
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,

    /// Inbox tracks export awaiting review
    #[serde(default)]
    pub inbox_path: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load and parse a TOML config file
    ///
    /// Strict variant: any I/O or parse failure is returned as `Error::Config`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Locates and loads the bootstrap config with graceful degradation
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Resolve the config file path by priority order
    ///
    /// Returns `None` when no candidate exists on disk.
    pub fn config_path(&self) -> Option<PathBuf> {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_path {
            return Some(path.clone());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        // Priority 3: Per-user config directory
        default_config_path().filter(|path| path.exists())
    }

    /// Load the resolved config, falling back to defaults on any failure
    pub fn resolve(&self) -> TomlConfig {
        let Some(path) = self.config_path() else {
            debug!("No config file found, using built-in defaults");
            return TomlConfig::default();
        };

        match TomlConfig::load(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config file");
                config
            }
            Err(e) => {
                warn!("{}; using built-in defaults", e);
                TomlConfig::default()
            }
        }
    }
}

/// Default per-user config file location for the platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lectorium").join("inbox.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults_to_info() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.dictionary_path.is_none());
        assert!(config.inbox_path.is_none());
    }

    #[test]
    fn test_parses_all_fields() {
        let config: TomlConfig = toml::from_str(
            r#"
            dictionary_path = "/data/dictionary.json"
            inbox_path = "/data/inbox.json"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.dictionary_path, Some(PathBuf::from("/data/dictionary.json")));
        assert_eq!(config.inbox_path, Some(PathBuf::from("/data/inbox.json")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_cli_path_has_priority() {
        let resolver = ConfigResolver::new(Some(PathBuf::from("/explicit/inbox.toml")));
        assert_eq!(resolver.config_path(), Some(PathBuf::from("/explicit/inbox.toml")));
    }
}
