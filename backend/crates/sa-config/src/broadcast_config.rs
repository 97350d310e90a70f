use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CHANNEL_CAPACITY, MAX_CHANNEL_CAPACITY,
    MIN_CHANNEL_CAPACITY,
};

use serde::Deserialize;

/// Control-plane fan-out settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Messages retained for slow sessions before the oldest is dropped
    pub channel_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl BroadcastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.channel_capacity < MIN_CHANNEL_CAPACITY
            || self.channel_capacity > MAX_CHANNEL_CAPACITY
        {
            return Err(ConfigError::broadcast(format!(
                "broadcast.channel_capacity must be {}-{}, got {}",
                MIN_CHANNEL_CAPACITY, MAX_CHANNEL_CAPACITY, self.channel_capacity
            )));
        }

        Ok(())
    }
}
