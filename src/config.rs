//! User configuration loaded from `config.toml`.
//!
//! Precedence: command-line flags and environment, then the config file,
//! then built-in defaults.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Deserialize;

use crate::constants;

/// Effective settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Dataset file. Relative paths resolve against the working directory.
    pub database: PathBuf,
    /// Offer to plot results after reports that support it.
    pub plots: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from(constants::DEFAULT_DATABASE_FILE),
            plots: true,
        }
    }
}

/// Where the settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No config file; built-in defaults.
    Defaults,
    /// The config file in the user config directory.
    File(PathBuf),
    /// A file named with `--config`.
    Explicit(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Explicit(path) => write!(f, "{} (--config)", path.display()),
        }
    }
}

impl Settings {
    /// Load settings from an explicit file, else from the default location
    /// when it exists, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if any file read
    /// cannot be parsed.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let settings = Self::from_file(path)?;
            return Ok((settings, ConfigSource::Explicit(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                let settings = Self::from_file(&path)?;
                Ok((settings, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Parse a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .wrap_err_with(|| format!("Invalid config file {}", path.display()))
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, database: Option<PathBuf>, no_plot: bool) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        if no_plot {
            self.plots = false;
        }
        self
    }
}

/// `<config dir>/ridership/config.toml`, when the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::APP_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}
