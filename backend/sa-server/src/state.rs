use sa_config::Config;
use sa_ws::{
    AppState, BroadcastConfig, Broker, ConnectionConfig, ConnectionLimits, Metrics,
    ShutdownCoordinator,
};

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;

/// Router state: the stream/broker state plus the directory static files come from
#[derive(Clone)]
pub struct ServerState {
    pub app: AppState,
    pub static_root: Arc<PathBuf>,
}

impl ServerState {
    pub fn new(app: AppState, static_root: impl Into<PathBuf>) -> Self {
        Self {
            app,
            static_root: Arc::new(static_root.into()),
        }
    }

    /// Wire the broker and session settings from validated configuration.
    pub fn from_config(config: &Config, shutdown: ShutdownCoordinator) -> Self {
        let broker = Broker::new(
            ConnectionLimits {
                max_total: config.server.max_connections,
            },
            BroadcastConfig {
                channel_capacity: config.broadcast.channel_capacity,
            },
        );

        let generator = config.spectrum.generator_config();

        let app = AppState {
            broker,
            generator,
            config: ConnectionConfig {
                tick_interval: config.stream.tick_interval(),
            },
            metrics: Metrics::new(),
            shutdown,
        };

        Self::new(app, &config.server.static_root)
    }
}

impl FromRef<ServerState> for AppState {
    fn from_ref(state: &ServerState) -> Self {
        state.app.clone()
    }
}
