use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS,
    MIN_TICK_INTERVAL_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Per-session streaming cadence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Milliseconds between frames
    pub tick_interval_ms: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl StreamConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS
            || self.tick_interval_ms > MAX_TICK_INTERVAL_MS
        {
            return Err(ConfigError::stream(format!(
                "stream.tick_interval_ms must be {}-{}, got {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, self.tick_interval_ms
            )));
        }

        Ok(())
    }
}
