use std::time::Duration;

/// Per-session streaming settings
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Delay between spectrum frames
    pub tick_interval: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
        }
    }
}
