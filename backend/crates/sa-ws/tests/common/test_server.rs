#![allow(dead_code)]

use sa_core::GeneratorConfig;
use sa_ws::{
    AppState, BroadcastConfig, Broker, ConnectionConfig, ConnectionLimits, Metrics,
    ShutdownCoordinator,
};

use std::time::Duration;

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Frame length used by test servers; small to keep frames cheap
pub const TEST_FRAME_LENGTH: usize = 128;

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub channel_capacity: usize,
    pub tick_interval: Duration,
    pub frame_length: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            channel_capacity: 16,
            tick_interval: Duration::from_millis(20),
            frame_length: TEST_FRAME_LENGTH,
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let broker = Broker::new(
        ConnectionLimits {
            max_total: config.max_connections_total,
        },
        BroadcastConfig {
            channel_capacity: config.channel_capacity,
        },
    );

    let app_state = AppState {
        broker,
        generator: GeneratorConfig {
            frame_length: config.frame_length,
            in_band_half_width: config.frame_length / 16,
            ..Default::default()
        },
        config: ConnectionConfig {
            tick_interval: config.tick_interval,
        },
        metrics: Metrics::default(),
        shutdown: ShutdownCoordinator::new(),
    };

    let router = Router::new()
        .route("/stream", get(sa_ws::handler))
        .with_state(app_state.clone());

    (router, app_state)
}
