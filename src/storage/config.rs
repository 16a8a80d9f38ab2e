//! Configuration handling for the contact book
//!
//! Configuration is stored in `~/.config/contact-book/config.toml` (or the
//! platform equivalent). Every key is optional.
//!
//! ```toml
//! book_path = "/home/me/contacts.jsonl"
//! default_format = "json"
//! birthday_window_days = 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::jsonl::BOOK_FILE_NAME;
use crate::domain::DEFAULT_WINDOW_DAYS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format used when `--format` is not given
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DefaultFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the address book lives (defaults to the platform data dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_path: Option<PathBuf>,

    /// Default output format
    pub default_format: DefaultFormat,

    /// Days ahead covered by `birthdays`, today included
    pub birthday_window_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_path: None,
            default_format: DefaultFormat::Text,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "contact-book", "contact-book")
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the default address book path
    ///
    /// Falls back to the current directory when no home directory is known.
    pub fn default_book_path() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join(BOOK_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(BOOK_FILE_NAME))
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        Ok(config)
    }

    /// Parses and validates TOML configuration
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.birthday_window_days == 0 {
            return Err(ConfigError::Invalid(
                "birthday_window_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the address book path: explicit override, config, default
    pub fn book_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.book_path.clone())
            .unwrap_or_else(Self::default_book_path)
    }

    /// Writes the configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
