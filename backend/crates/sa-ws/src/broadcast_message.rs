use serde::Serialize;

/// A control value fanned out to every live session.
///
/// Serialized untagged, so `Center { center: 5 }` goes out as `{"center":5}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BroadcastMessage {
    Center { center: i64 },
}

impl BroadcastMessage {
    pub fn center(value: i64) -> Self {
        Self::Center { center: value }
    }

    /// Message type for metrics/logging
    pub fn message_type(&self) -> &'static str {
        match self {
            Self::Center { .. } => "center",
        }
    }
}
