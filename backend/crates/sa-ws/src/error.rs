use std::panic::Location;

use error_location::ErrorLocation;
use sa_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Send failed: {reason} {location}")]
    SendFailed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("JSON encode failed: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Generator setup failed: {source} {location}")]
    Generator {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl WsError {
    /// Client went away. Expected, ends only the affected session.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionClosed { .. } | Self::SendFailed { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::SendFailed { .. } => "SEND_FAILED",
            Self::Serialize { .. } => "ENCODE_ERROR",
            Self::ConnectionLimitExceeded { .. } => "CONNECTION_LIMIT",
            Self::Generator { .. } => "GENERATOR_ERROR",
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for WsError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Generator {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
