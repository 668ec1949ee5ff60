mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod polling_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use polling_config::PollingConfig;
pub use storage_config::StorageConfig;

/// Directory used when `CG_CONFIG_DIR` is not set (relative to the cwd)
pub const DEFAULT_CONFIG_DIRECTORY: &str = ".cg";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
