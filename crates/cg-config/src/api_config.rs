use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the upstream REST API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute origin every resource path is resolved against.
    /// There is no default: a missing value is a configuration error
    /// for any code path that talks to the network.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::config(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if let Some(url) = self.base_url.as_deref().map(str::trim)
            && !url.is_empty()
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {url}"
            )));
        }

        Ok(())
    }

    /// The configured base URL, or a configuration error when unset/blank.
    #[track_caller]
    pub fn require_base_url(&self) -> ConfigErrorResult<&str> {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ConfigError::api(
                "api.base_url is not set (set CG_API_BASE_URL or [api] base_url)",
            )),
        }
    }
}
