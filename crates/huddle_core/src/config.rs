//! Runtime configuration for profile fetching.
//!
//! # Responsibility
//! - Provide defaults for the insights endpoint and request timeout.
//! - Apply `HUDDLE_*` environment overrides and validate the result.
//!
//! # Invariants
//! - A validated config always holds an absolute `http`/`https` URL.
//! - Request timeout stays within `1..=120` seconds.

use reqwest::Url;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Endpoint served by the local insights API.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/profiles";
/// Environment variable overriding the endpoint.
pub const ENV_ENDPOINT: &str = "HUDDLE_ENDPOINT";
/// Environment variable overriding the timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "HUDDLE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 120;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEndpoint(String),
    InvalidTimeout(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEndpoint(message) => write!(f, "invalid endpoint: {message}"),
            Self::InvalidTimeout(message) => write!(f, "invalid timeout: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Fetch configuration shared by CLI and FFI entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuddleConfig {
    pub endpoint: String,
    pub request_timeout: Duration,
}

impl Default for HuddleConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HuddleConfig {
    /// Builds a config from defaults plus process environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults plus overrides returned by `lookup`.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(endpoint) = non_blank(lookup(ENV_ENDPOINT)) {
            config.endpoint = endpoint;
        }
        if let Some(raw) = non_blank(lookup(ENV_TIMEOUT_SECS)) {
            config = config.with_timeout_secs(parse_timeout_secs(&raw)?);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim().to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs);
        self
    }

    /// Validates endpoint shape and timeout bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = Url::parse(self.endpoint.as_str())
            .map_err(|err| ConfigError::InvalidEndpoint(format!("`{}`: {err}", self.endpoint)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint(format!(
                "`{}` must use http or https",
                self.endpoint
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::InvalidEndpoint(format!(
                "`{}` has no host",
                self.endpoint
            )));
        }

        let secs = self.request_timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout(format!(
                "{secs}s is outside 1..={MAX_TIMEOUT_SECS}s"
            )));
        }
        Ok(())
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|err| ConfigError::InvalidTimeout(format!("`{raw}`: {err}")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
