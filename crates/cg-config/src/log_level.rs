use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// `[logging] level` or `CG_LOG_LEVEL`.
///
/// Never rejects a value: anything `log` does not recognize, including a
/// non-string TOML value, means `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl LogLevel {
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim()
            .parse::<LevelFilter>()
            .map(LogLevel)
            .unwrap_or_default()
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer).ok();
        Ok(raw.as_deref().map(Self::parse_lenient).unwrap_or_default())
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}
