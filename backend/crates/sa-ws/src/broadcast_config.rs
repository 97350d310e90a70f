/// Configuration for the control-plane broadcast channel
#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// Ring size; a session more than this many messages behind loses the oldest ones
    pub channel_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 16,
        }
    }
}
