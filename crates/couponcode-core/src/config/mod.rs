//! Configuration management for couponcode.
//!
//! This module handles loading, saving, and managing the code shape and
//! bad word settings.
//!
//! ## Configuration File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/couponcode/config.toml` |
//! | macOS | `~/Library/Application Support/com.couponcode.Couponcode/config.toml` |
//! | Windows | `%APPDATA%\Couponcode\Couponcode\config\config.toml` |
//!
//! ## Example
//!
//! ```rust,ignore
//! use couponcode_core::config::Config;
//!
//! let config = Config::load()?;
//! let generator = config.generator()?;
//! println!("{}", generator.generate()?);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::code::{BadWords, Generator, GeneratorConfig, NoFilter};
use crate::error::{Error, Result};

/// Main configuration struct for couponcode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Code shape
    pub code: GeneratorConfig,
    /// Bad word settings
    pub bad_words: BadWordsConfig,
}

/// Bad word configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadWordsConfig {
    /// Include the built-in word list
    pub builtin: bool,
    /// Additional words to avoid
    pub extra: Vec<String>,
}

impl Default for BadWordsConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            extra: Vec::new(),
        }
    }
}

impl BadWordsConfig {
    /// Build the word filter described by this section.
    #[must_use]
    pub fn to_filter(&self) -> BadWords {
        let mut words = if self.builtin {
            BadWords::builtin()
        } else {
            BadWords::default()
        };
        words.extend(&self.extra);
        words
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// If the configuration file doesn't exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to the default location.
    ///
    /// Creates the configuration directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigError(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| Error::ConfigError(format!("Failed to write config: {e}")))
    }

    /// Build a generator from the configured shape and word list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the shape is out of range.
    pub fn generator(&self) -> Result<Generator> {
        let generator = Generator::with_config(self.code)?;
        let words = self.bad_words.to_filter();
        if words.is_empty() {
            Ok(generator.with_filter(NoFilter))
        } else {
            Ok(generator.with_filter(words))
        }
    }

    /// Get the default configuration directory path.
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "couponcode", "Couponcode")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the full path to the configuration file.
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }
}
