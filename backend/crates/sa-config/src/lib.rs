mod broadcast_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod spectrum_config;
mod stream_config;

#[cfg(test)]
mod tests;

pub use broadcast_config::BroadcastConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use spectrum_config::SpectrumConfig;
pub use stream_config::StreamConfig;

const CONFIG_DIR_ENV: &str = "SA_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".spectrum";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;
const DEFAULT_STATIC_ROOT: &str = ".";

const MAX_FRAME_LENGTH: usize = 65_536;

const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
const MIN_TICK_INTERVAL_MS: u64 = 10;
const MAX_TICK_INTERVAL_MS: u64 = 10_000;

const DEFAULT_CHANNEL_CAPACITY: usize = 16;
const MIN_CHANNEL_CAPACITY: usize = 1;
const MAX_CHANNEL_CAPACITY: usize = 4096;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
