//! End-to-end scenarios over a real HTTP listener
mod common;

use crate::common::{
    TEST_FRAME_LENGTH, TEST_HALF_WIDTH, create_static_root, create_test_server, create_test_state,
};

use sa_core::SpectrumFrame;

use axum_test::{TestServer, TestWebSocket};
use serde_json::{Value, json};

async fn connect(server: &TestServer, path: &str) -> TestWebSocket {
    server.get_websocket(path).await.into_websocket().await
}

async fn receive_json(ws: &mut TestWebSocket) -> Value {
    let text = ws.receive_text().await;
    serde_json::from_str(&text).expect("message should be JSON")
}

async fn receive_broadcast(ws: &mut TestWebSocket) -> Value {
    loop {
        let json = receive_json(ws).await;
        if json.get("s").is_none() {
            return json;
        }
    }
}

#[tokio::test]
async fn given_two_sessions_when_center_put_then_both_receive_center() {
    // Given
    let root = create_static_root();
    let server = create_test_server(create_test_state(root.path()));
    let mut first = connect(&server, "/stream").await;
    let mut second = connect(&server, "/stream").await;
    receive_json(&mut first).await;
    receive_json(&mut second).await;

    // When
    let response = server
        .put("/centerfreq")
        .json(&json!({ "value": 1000000 }))
        .await;

    // Then
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "center frequency updated", "center": 1000000 })
    );
    assert_eq!(receive_broadcast(&mut first).await, json!({ "center": 1000000 }));
    assert_eq!(receive_broadcast(&mut second).await, json!({ "center": 1000000 }));
}

#[tokio::test]
async fn given_session_when_streaming_then_in_band_window_sits_at_in_band_offset() {
    // Given
    let root = create_static_root();
    let server = create_test_server(create_test_state(root.path()));
    let mut ws = connect(&server, "/stream").await;

    // When
    let frame: SpectrumFrame = serde_json::from_value(receive_json(&mut ws).await).unwrap();

    // Then - defaults: in-band -20 (+-3 sine, +10 jitter), out-of-band -100
    let samples = frame.samples();
    assert_eq!(samples.len(), TEST_FRAME_LENGTH);
    let in_band = (TEST_FRAME_LENGTH / 2 - TEST_HALF_WIDTH)..(TEST_FRAME_LENGTH / 2 + TEST_HALF_WIDTH);
    assert_eq!(in_band, 1952..2144);
    for (i, sample) in samples.iter().enumerate() {
        if in_band.contains(&i) {
            assert!((-23..=-7).contains(sample), "bin {i} = {sample}");
        } else {
            assert!((-103..=-87).contains(sample), "bin {i} = {sample}");
        }
    }
}

#[tokio::test]
async fn given_legacy_path_when_connecting_then_stream_is_served() {
    let root = create_static_root();
    let server = create_test_server(create_test_state(root.path()));

    let mut ws = connect(&server, "/websocket").await;

    let json = receive_json(&mut ws).await;
    assert_eq!(json["s"].as_array().map(Vec::len), Some(TEST_FRAME_LENGTH));
}

#[tokio::test]
async fn given_empty_body_when_center_put_then_sessions_see_nothing() {
    // Given
    let root = create_static_root();
    let state = create_test_state(root.path());
    let server = create_test_server(state.clone());
    let mut ws = connect(&server, "/stream").await;
    receive_json(&mut ws).await;

    // When
    let rejected = server
        .put("/centerfreq")
        .json(&json!({}))
        .await;
    server
        .put("/centerfreq")
        .json(&json!({ "value": 7 }))
        .await
        .assert_status_ok();

    // Then - the first broadcast observed is the accepted one
    rejected.assert_status_bad_request();
    assert_eq!(rejected.json::<Value>(), json!({ "error": "Invalid JSON" }));
    assert_eq!(receive_broadcast(&mut ws).await, json!({ "center": 7 }));
}

#[tokio::test]
async fn given_session_when_closed_then_health_reports_zero_connections() {
    // Given
    let root = create_static_root();
    let state = create_test_state(root.path());
    let server = create_test_server(state.clone());
    let mut ws = connect(&server, "/stream").await;
    receive_json(&mut ws).await;
    let registry = state.app.broker.registry().clone();
    assert_eq!(registry.total_count(), 1);

    // When
    ws.close().await;
    tokio::time::timeout(
        std::time::Duration::from_secs(2),
        registry.wait_until_empty(),
    )
    .await
    .expect("session should deregister");

    // Then
    let health = server.get("/health").await.json::<Value>();
    assert_eq!(health["connections"], 0);
}
