//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment variable overriding the database path.
pub const DATABASE_PATH_ENV: &str = "TODOLIST_DATABASE_PATH";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "TODOLIST_LOG_LEVEL";

/// Configuration for the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database_path: PathBuf,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let dir = config_dir().unwrap_or_else(|_| PathBuf::from(".todolist"));
        Self {
            database_path: dir.join("todo.db"),
            log_level: "info".to_string(),
        }
    }
}

/// Returns the config directory path (~/.todolist/)
pub fn config_dir() -> ConfigResult<PathBuf> {
    dirs::home_dir()
        .map(|p| p.join(".todolist"))
        .ok_or(ConfigError::ConfigDirNotFound)
}

impl Config {
    /// Loads configuration from `~/.todolist/config.toml` (if present) and the
    /// environment.
    pub fn load() -> ConfigResult<Self> {
        let mut config = match config_dir() {
            Ok(dir) => Self::from_file(&dir.join("config.toml"))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Loads configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATABASE_PATH_ENV).filter(|v| !v.is_empty()) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
        assert!(config.database_path.ends_with("todo.db"));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.database_path, Config::default().database_path);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (DATABASE_PATH_ENV, "/tmp/todo-test.db"),
            (LOG_LEVEL_ENV, ""),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_path, PathBuf::from("/tmp/todo-test.db"));
        assert_eq!(config.log_level, "info");
    }
}
