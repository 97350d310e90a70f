use metrics::{counter, gauge};

/// Metrics collector for streaming sessions
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "sa_ws" }
    }

    /// Record a session entering Active
    pub fn session_established(&self) {
        counter!(format!("{}.sessions.established", self.prefix)).increment(1);
        gauge!(format!("{}.sessions.active", self.prefix)).increment(1.0);
    }

    /// Record a session reaching Closed
    pub fn session_closed(&self, reason: &str) {
        counter!(format!("{}.sessions.closed", self.prefix)).increment(1);
        counter!(format!("{}.sessions.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.sessions.active", self.prefix)).decrement(1.0);
    }

    pub fn frame_sent(&self) {
        counter!(format!("{}.frames.sent", self.prefix)).increment(1);
    }

    /// Record a control message published by the control endpoint
    pub fn broadcast_published(&self, message_type: &str, subscriber_count: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.published.{}", self.prefix, message_type)).increment(1);
        gauge!(format!("{}.broadcast.subscribers", self.prefix)).set(subscriber_count as f64);
    }

    /// Record a control message written to one client
    pub fn broadcast_forwarded(&self, message_type: &str) {
        counter!(format!("{}.broadcast.forwarded.{}", self.prefix, message_type)).increment(1);
    }

    pub fn broadcast_lagged(&self, missed: u64) {
        counter!(format!("{}.broadcast.lagged", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.dropped", self.prefix)).increment(missed);
    }

    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
