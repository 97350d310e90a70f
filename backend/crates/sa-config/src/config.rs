use crate::{
    BroadcastConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, LoggingConfig, ServerConfig, SpectrumConfig, StreamConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub spectrum: SpectrumConfig,
    pub stream: StreamConfig,
    pub broadcast: BroadcastConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from disk and environment.
    ///
    /// Loading order:
    /// 1. Check for SA_CONFIG_DIR env var, else use ./.spectrum/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SA_CONFIG_DIR env var > ./.spectrum/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all sections. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.spectrum.validate()?;
        self.stream.validate()?;
        self.broadcast.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute log file path, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} sessions, static root {})",
            self.server.host, self.server.port, self.server.max_connections, self.server.static_root
        );
        info!(
            "  spectrum: L={}, window=±{}, offsets={}/{}, sine={}, jitter={}",
            self.spectrum.frame_length,
            self.spectrum.in_band_half_width,
            self.spectrum.in_band_offset,
            self.spectrum.out_of_band_offset,
            self.spectrum.sine_amplitude,
            self.spectrum.jitter_amplitude
        );
        info!("  stream: tick={}ms", self.stream.tick_interval_ms);
        info!(
            "  broadcast: capacity={} (drop-oldest)",
            self.broadcast.channel_capacity
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SA_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "SA_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );
        Self::apply_env_string("SA_SERVER_STATIC_ROOT", &mut self.server.static_root);

        // Spectrum
        Self::apply_env_parse(
            "SA_SPECTRUM_FRAME_LENGTH",
            &mut self.spectrum.frame_length,
        );
        Self::apply_env_parse(
            "SA_SPECTRUM_IN_BAND_HALF_WIDTH",
            &mut self.spectrum.in_band_half_width,
        );
        Self::apply_env_parse(
            "SA_SPECTRUM_IN_BAND_OFFSET",
            &mut self.spectrum.in_band_offset,
        );
        Self::apply_env_parse(
            "SA_SPECTRUM_OUT_OF_BAND_OFFSET",
            &mut self.spectrum.out_of_band_offset,
        );
        Self::apply_env_parse(
            "SA_SPECTRUM_SINE_AMPLITUDE",
            &mut self.spectrum.sine_amplitude,
        );
        Self::apply_env_parse(
            "SA_SPECTRUM_JITTER_AMPLITUDE",
            &mut self.spectrum.jitter_amplitude,
        );

        // Stream
        Self::apply_env_parse(
            "SA_STREAM_TICK_INTERVAL_MS",
            &mut self.stream.tick_interval_ms,
        );

        // Broadcast
        Self::apply_env_parse(
            "SA_BROADCAST_CHANNEL_CAPACITY",
            &mut self.broadcast.channel_capacity,
        );

        // Logging
        Self::apply_env_parse("SA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SA_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
