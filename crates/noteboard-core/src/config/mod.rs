//! Application configuration.
//!
//! Layers, lowest precedence first: built-in defaults, an optional JSON file,
//! then `NOTEBOARD_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding the theme.
pub const THEME_ENV: &str = "NOTEBOARD_THEME";
/// Environment variable setting a direct download directory.
pub const DOWNLOAD_DIR_ENV: &str = "NOTEBOARD_DOWNLOAD_DIR";
/// Environment variable pointing at a config file.
pub const CONFIG_PATH_ENV: &str = "NOTEBOARD_CONFIG";

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    #[default]
    Dark,
    /// Follow system preference
    System,
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(Error::Config(format!(
                "unknown theme '{other}' (expected light, dark or system)"
            ))),
        }
    }
}

/// Runtime configuration for the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    /// When set, downloads are written here instead of prompting.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Parse a JSON config file body.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Each variable is applied on its own. Blank values are ignored, and an
    /// invalid theme is logged and skipped without affecting the others.
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(theme) = non_blank(lookup(THEME_ENV)) {
            match theme.parse() {
                Ok(theme) => self.theme = theme,
                Err(error) => tracing::warn!("Ignoring {}: {}", THEME_ENV, error),
            }
        }
        if let Some(dir) = non_blank(lookup(DOWNLOAD_DIR_ENV)) {
            self.download_dir = Some(PathBuf::from(dir));
        }
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
