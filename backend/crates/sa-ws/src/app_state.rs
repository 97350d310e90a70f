use crate::{Broker, ConnectionConfig, Metrics, ShutdownCoordinator, StreamSession};

use sa_core::GeneratorConfig;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use futures::StreamExt;
use log::{debug, error, info, warn};

/// Shared application state for HTTP and WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub broker: Broker,
    pub generator: GeneratorConfig,
    pub config: ConnectionConfig,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    if state.shutdown.is_shutdown() {
        debug!("Rejecting stream upgrade during shutdown");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    if state.broker.registry().is_full() {
        warn!(
            "Rejecting stream upgrade: {} sessions already live",
            state.broker.registry().total_count()
        );
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state)))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(socket: WebSocket, state: AppState) {
    let shutdown_guard = state.shutdown.subscribe_guard();
    let (sink, stream) = socket.split();

    let session = StreamSession::new(
        state.broker.clone(),
        state.generator.clone(),
        state.config.clone(),
        state.metrics.clone(),
    );

    match session.run(sink, stream, shutdown_guard).await {
        Ok(()) => {}
        Err(e) if e.is_transport() => {
            info!("Stream session ended: {e}");
        }
        Err(e) => {
            state.metrics.error_occurred(e.error_code());
            error!("Stream session failed: {e}");
        }
    }
}
