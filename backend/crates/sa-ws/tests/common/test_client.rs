#![allow(dead_code)]

use sa_core::SpectrumFrame;

use axum_test::{TestServer, TestWebSocket};
use serde_json::Value;

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the stream endpoint
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server.get_websocket("/stream").await.into_websocket().await;
        Self { ws }
    }

    /// Connect and wait for the first frame, which proves the session is registered
    pub async fn connect_streaming(server: &TestServer) -> Self {
        let mut client = Self::connect(server).await;
        client.receive_frame().await;
        client
    }

    /// Receive the next message as JSON
    pub async fn receive_json(&mut self) -> Value {
        let text = self.ws.receive_text().await;
        serde_json::from_str(&text).expect("message should be JSON")
    }

    /// Receive the next message and decode it as a spectrum frame
    pub async fn receive_frame(&mut self) -> SpectrumFrame {
        let text = self.ws.receive_text().await;
        serde_json::from_str(&text).expect("message should be a spectrum frame")
    }

    /// Skip spectrum frames until a broadcast message arrives
    pub async fn receive_broadcast(&mut self) -> Value {
        loop {
            let json = self.receive_json().await;
            if json.get("s").is_none() {
                return json;
            }
        }
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect several streaming clients
pub async fn create_clients(server: &TestServer, count: usize) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect_streaming(server).await);
    }
    clients
}
