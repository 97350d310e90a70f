use crate::{ServerState, api, health};

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};

/// Build the application router with all endpoints
pub fn build_router(state: ServerState) -> Router {
    let root = state.static_root.as_path();
    let index = ServeFile::new(root.join("index.html"));
    let assets = ServeDir::new(root.join("static"));

    Router::new()
        // Spectrum stream (legacy path kept for older front-ends)
        .route("/stream", get(sa_ws::handler))
        .route("/websocket", get(sa_ws::handler))
        // Control endpoint
        .route("/centerfreq", put(api::center_freq::update_center_frequency))
        // Static content
        .route_service("/", index)
        .nest_service("/static", assets)
        .route("/file/{*path}", get(api::files::serve_file))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
