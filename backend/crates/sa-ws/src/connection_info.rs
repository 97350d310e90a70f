use crate::ConnectionId;

use chrono::{DateTime, Utc};

/// Registry entry for a live session
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<Utc>,
}
