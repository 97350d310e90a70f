pub mod app_state;
pub mod broadcast_config;
pub mod broadcast_message;
pub mod broker;
pub mod center_broadcaster;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod error;
pub mod metrics;
pub mod registration;
pub mod session_state;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod stream_session;

pub use app_state::{AppState, handler};
pub use broadcast_config::BroadcastConfig;
pub use broadcast_message::BroadcastMessage;
pub use broker::Broker;
pub use center_broadcaster::CenterBroadcaster;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use error::{Result, WsError};
pub use metrics::Metrics;
pub use registration::Registration;
pub use session_state::SessionState;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use stream_session::StreamSession;
