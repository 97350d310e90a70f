#![allow(dead_code)]

//! Test infrastructure for sa-server API tests

use sa_core::GeneratorConfig;
use sa_server::{ServerState, build_router};
use sa_ws::{
    AppState, BroadcastConfig, Broker, ConnectionConfig, ConnectionLimits, Metrics,
    ShutdownCoordinator,
};

use std::fs;
use std::path::Path;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use axum_test::TestServer;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_FRAME_LENGTH: usize = 4096;
pub const TEST_HALF_WIDTH: usize = 96;

/// Create AppState for testing
pub fn create_test_app_state() -> AppState {
    AppState {
        broker: Broker::new(
            ConnectionLimits { max_total: 100 },
            BroadcastConfig::default(),
        ),
        generator: GeneratorConfig {
            frame_length: TEST_FRAME_LENGTH,
            in_band_half_width: TEST_HALF_WIDTH,
            ..Default::default()
        },
        config: ConnectionConfig {
            tick_interval: Duration::from_millis(20),
        },
        metrics: Metrics::new(),
        shutdown: ShutdownCoordinator::new(),
    }
}

/// Static root with an entry document, one asset and one data file
pub fn create_static_root() -> TempDir {
    let root = TempDir::new().expect("Failed to create static root");
    fs::write(root.path().join("index.html"), "<html>spectrum</html>").unwrap();
    fs::create_dir(root.path().join("static")).unwrap();
    fs::write(root.path().join("static").join("app.js"), "console.log(1);").unwrap();
    fs::write(root.path().join("notes.txt"), "hello").unwrap();
    root
}

pub fn create_test_state(static_root: &Path) -> ServerState {
    ServerState::new(create_test_app_state(), static_root)
}

pub fn create_test_router(static_root: &Path) -> (Router, ServerState) {
    let state = create_test_state(static_root);
    (build_router(state.clone()), state)
}

/// Real HTTP server, needed for WebSocket upgrades
pub fn create_test_server(state: ServerState) -> TestServer {
    TestServer::builder()
        .http_transport()
        .build(build_router(state))
        .expect("Failed to create test server")
}

/// Send one request through the router, returning status and raw body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub fn put_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
