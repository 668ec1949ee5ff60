use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_INTERVAL_SECS: u64 = 5;
pub const MAX_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Refresh cadence for "live" widgets such as unread message counts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub interval_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

impl PollingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_secs < MIN_INTERVAL_SECS || self.interval_secs > MAX_INTERVAL_SECS {
            return Err(ConfigError::polling(format!(
                "polling.interval_secs must be {}-{}, got {}",
                MIN_INTERVAL_SECS, MAX_INTERVAL_SECS, self.interval_secs
            )));
        }

        Ok(())
    }
}
