//! Configuration loading for the desktop app.
//!
//! Reads the optional JSON config file, applies `NOTEBOARD_*` environment
//! overrides, and keeps the result for the lifetime of the process.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use noteboard_core::config::{AppConfig, CONFIG_PATH_ENV};
use thiserror::Error;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Errors while reading the config file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: noteboard_core::Error,
    },
}

/// Store the loaded configuration. Later calls are ignored.
pub fn install(config: AppConfig) {
    if APP_CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already installed, ignoring reload");
    }
}

/// The installed configuration, or defaults when none was installed.
pub fn app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// Load configuration from file and environment.
///
/// Never fails: a broken file or a bad override is logged and skipped.
pub fn load_config() -> AppConfig {
    load_config_with(|key| std::env::var(key).ok(), dirs::config_dir())
}

/// Load configuration reading variables through `lookup`.
pub fn load_config_with<F>(lookup: F, config_dir: Option<PathBuf>) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let base = match resolve_config_path(lookup(CONFIG_PATH_ENV), config_dir) {
        Some(path) => read_config_file(&path).unwrap_or_else(|error| {
            tracing::warn!("Using default configuration: {}", error);
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    base.with_env_overrides(lookup)
}

/// Pick the config file: an explicit path wins over the per-user default.
pub fn resolve_config_path(
    explicit: Option<String>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(explicit) = explicit.filter(|value| !value.trim().is_empty()) {
        return Some(PathBuf::from(explicit.trim()));
    }
    config_dir.map(|dir| dir.join("noteboard").join("config.json"))
}

/// Read a config file; a missing file yields defaults.
pub fn read_config_file(path: &Path) -> Result<AppConfig, ConfigLoadError> {
    let payload = match std::fs::read_to_string(path) {
        Ok(payload) => payload,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    AppConfig::from_json(&payload).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
