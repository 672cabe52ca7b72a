//! Shared configuration for the mkc tools.
//!
//! A TOML file under the platform config directory, overridable by `MKC_*`
//! environment variables, translated into `mkc_core` transport settings and
//! a ready `RegistryClient`. The CLI layers its flag overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use mkc_core::{CoreError, DEFAULT_BASE_URL, RegistryClient, TransportConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("cannot build registry client: {0}")]
    Client(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Site root the registry API and storage paths hang off.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Override the User-Agent header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Permit a plain-HTTP base URL (local mirrors only).
    #[serde(default)]
    pub allow_http: bool,

    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: None,
            allow_http: false,
            defaults: Defaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}

impl Config {
    /// Transport settings for this configuration.
    pub fn transport(&self) -> TransportConfig {
        let mut transport = TransportConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_allow_http(self.allow_http);
        if let Some(ref agent) = self.user_agent {
            transport.user_agent.clone_from(agent);
        }
        transport
    }

    pub fn base_url(&self) -> Result<Url, ConfigError> {
        self.base_url.parse().map_err(|e| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("{e}: {}", self.base_url),
        })
    }

    /// Build a client honouring the configured base URL and transport.
    pub fn registry_client(&self) -> Result<RegistryClient, ConfigError> {
        let url = self.base_url()?;
        RegistryClient::new(url, &self.transport()).map_err(|e| ConfigError::Client(e.into()))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "mkc", "mkc").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("mkc");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load defaults, then `path` if it exists, then `MKC_*` variables.
///
/// Nested keys use a double underscore: `MKC_DEFAULTS__OUTPUT=json`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("MKC_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load the canonical file alone, without `MKC_*` overrides.
pub fn load_file_config() -> Result<Config, ConfigError> {
    load_file_config_from(&config_path())
}

/// Load defaults, then `path` if it exists. Environment variables are
/// ignored, so a config edited from this and saved back holds file values only.
pub fn load_file_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
