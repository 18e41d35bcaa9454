//! Settings loaded from `.fraudcheck/config.toml` plus environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides the scoring service base URL.
pub const API_URL_ENV: &str = "FRAUDCHECK_API_URL";
/// Base URL used when neither the config file nor the environment names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Errors that may occur while loading app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be prepared.
    #[error("Config directory unavailable: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// Offending value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the scoring and catalog service, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Transport timeouts.
    #[serde(default)]
    pub http: HttpSettings,
}

/// Timeouts applied to the shared HTTP agent, in seconds. Zero disables one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_io_timeout_secs")]
    pub read_timeout_secs: u64,
    #[serde(default = "default_io_timeout_secs")]
    pub write_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            http: HttpSettings::default(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_io_timeout_secs(),
            write_timeout_secs: default_io_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_io_timeout_secs() -> u64 {
    30
}

/// Resolve the configuration file path inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
///
/// `FRAUDCHECK_API_URL` takes precedence over the file's `api_base_url`.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    let config = load_from(&path)?;
    let env_url = std::env::var(API_URL_ENV).ok();
    config.with_base_url_override(env_url.as_deref())
}

/// Load configuration from a specific file; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    config.normalized()
}

impl AppConfig {
    /// Replace the base URL when an override is present and non-blank.
    pub fn with_base_url_override(mut self, url: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(url) = url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_base_url = url.to_string();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(&self.api_base_url)?;
        Ok(self)
    }
}

/// Validate a base URL and strip trailing slashes so paths can be appended.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other:?}"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(trimmed.to_string())
}
