//! Probe configuration.
//!
//! Values are layered: built-in defaults, then an optional
//! `reqres-probe.{toml,yaml,json}` file in the working directory, then
//! `REQRES_*` environment variables (`REQRES_BASE_URL`,
//! `REQRES_TIMEOUT_SECS`, `REQRES_CONNECT_TIMEOUT_SECS`, `REQRES_API_KEY`).

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use reqres_infrastructure::ClientSettings;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Root of the public reqres API.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// File stem looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "reqres-probe";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const ENV_PREFIX: &str = "REQRES";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base_url '{url}': {reason}")]
    InvalidBaseUrl {
        /// Offending value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A timeout of zero was configured.
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    base_url: String,
    timeout_secs: u64,
    connect_timeout_secs: u64,
    #[serde(default)]
    api_key: Option<String>,
}

/// Validated probe configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Root URL all scenario paths are relative to.
    pub base_url: Url,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Optional `x-api-key` header value.
    pub api_key: Option<String>,
}

impl ProbeConfig {
    /// Loads configuration from the working directory and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Some(Path::new(DEFAULT_CONFIG_FILE)), None)
    }

    /// Loads configuration from an optional file and an environment.
    ///
    /// `file` is a path without extension; a missing file is not an error.
    /// `env` replaces the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value is invalid.
    pub fn load_from(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS)?;

        if let Some(file) = file {
            builder =
                builder.add_source(File::with_name(&file.to_string_lossy()).required(false));
        }

        let raw: RawConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        Self::try_from(raw)
    }

    /// Configuration for a base URL with default timeouts and no API key.
    #[must_use]
    pub const fn for_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            api_key: None,
        }
    }

    /// Settings for the HTTP adapter.
    #[must_use]
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            api_key: self.api_key.clone(),
        }
    }
}

impl TryFrom<RawConfig> for ProbeConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let base_url = Url::parse(&raw.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.base_url,
                reason: "scheme must be http or https".to_string(),
            });
        }
        if raw.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("timeout_secs"));
        }
        if raw.connect_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("connect_timeout_secs"));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(raw.timeout_secs),
            connect_timeout: Duration::from_secs(raw.connect_timeout_secs),
            api_key: raw.api_key.filter(|key| !key.trim().is_empty()),
        })
    }
}
