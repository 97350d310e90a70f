use crate::{
    BroadcastMessage, Broker, ConnectionConfig, ConnectionId, Metrics, Result as WsErrorResult,
    SessionState, ShutdownGuard, WsError,
};

use sa_core::{GeneratorConfig, SpectrumGenerator};

use std::fmt::Display;
use std::panic::Location;

use axum::extract::ws::Message;
use error_location::ErrorLocation;
use futures::{Sink, SinkExt, Stream, StreamExt};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{MissedTickBehavior, interval};

/// One connected client: a periodic frame producer plus a broadcast relay.
///
/// Both paths run in a single `select!` loop that owns the write half, so a
/// connection never has two concurrent writers.
pub struct StreamSession {
    broker: Broker,
    generator_config: GeneratorConfig,
    config: ConnectionConfig,
    metrics: Metrics,
    state: SessionState,
}

impl StreamSession {
    pub fn new(
        broker: Broker,
        generator_config: GeneratorConfig,
        config: ConnectionConfig,
        metrics: Metrics,
    ) -> Self {
        Self {
            broker,
            generator_config,
            config,
            metrics,
            state: SessionState::Connecting,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Drive the session until the client goes away or the process shuts down.
    ///
    /// Returns `Ok(())` for a clean close or shutdown. A transport error
    /// (see [`WsError::is_transport`]) is the normal way a session ends when the
    /// client disappears mid-write.
    pub async fn run<S, R, E>(
        mut self,
        mut sink: S,
        mut stream: R,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()>
    where
        S: Sink<Message> + Unpin,
        S::Error: Display,
        R: Stream<Item = Result<Message, E>> + Unpin,
        E: Display,
    {
        let mut generator = SpectrumGenerator::new(self.generator_config.clone())?;

        let registration = self.broker.registry().register()?;
        let connection_id = registration.connection_id();
        let mut broadcast_rx = self.broker.broadcaster().subscribe();
        self.transition(connection_id, SessionState::Active);
        self.metrics.session_established();

        let mut ticker = interval(self.config.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let result = loop {
            tokio::select! {
                // Periodic spectrum frame
                _ = ticker.tick() => {
                    let frame = generator.next_frame();
                    if let Err(e) = Self::send_json(&mut sink, &frame).await {
                        break Err(e);
                    }
                    self.metrics.frame_sent();
                }

                // Control-plane broadcast
                broadcast_msg = broadcast_rx.recv() => {
                    match broadcast_msg {
                        Ok(msg) => {
                            if let Err(e) = self.forward_broadcast(connection_id, &mut sink, &msg).await {
                                break Err(e);
                            }
                        }
                        Err(RecvError::Lagged(missed)) => {
                            log::warn!(
                                "Connection {connection_id} lagged, dropped {missed} oldest broadcasts"
                            );
                            self.metrics.broadcast_lagged(missed);
                        }
                        Err(RecvError::Closed) => {
                            log::info!("Broadcast channel closed for connection {connection_id}");
                            break Ok(());
                        }
                    }
                }

                // Client frames: only closure matters
                incoming = stream.next() => {
                    match incoming {
                        Some(Ok(Message::Close(_))) | None => {
                            log::info!("Connection {connection_id} closed by client");
                            break Ok(());
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {e}"),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                    }
                }

                // Graceful shutdown
                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {connection_id} gracefully");
                    let _ = sink.send(Message::Close(None)).await;
                    break Ok(());
                }
            }
        };

        drop(broadcast_rx);
        drop(registration);
        self.transition(connection_id, SessionState::Closed);

        let reason = match &result {
            Ok(()) => "normal",
            Err(e) if e.is_transport() => "disconnected",
            Err(_) => "error",
        };
        self.metrics.session_closed(reason);

        result
    }

    async fn forward_broadcast<S>(
        &self,
        connection_id: ConnectionId,
        sink: &mut S,
        msg: &BroadcastMessage,
    ) -> WsErrorResult<()>
    where
        S: Sink<Message> + Unpin,
        S::Error: Display,
    {
        Self::send_json(sink, msg).await?;
        log::debug!(
            "Forwarded {} broadcast to connection {connection_id}",
            msg.message_type()
        );
        self.metrics.broadcast_forwarded(msg.message_type());
        Ok(())
    }

    /// The only write path to the client.
    async fn send_json<S, T>(sink: &mut S, value: &T) -> WsErrorResult<()>
    where
        S: Sink<Message> + Unpin,
        S::Error: Display,
        T: Serialize,
    {
        let text = serde_json::to_string(value)?;
        sink.send(Message::Text(text.into()))
            .await
            .map_err(|e| WsError::SendFailed {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn transition(&mut self, connection_id: ConnectionId, next: SessionState) {
        log::info!(
            "Connection {connection_id}: {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }
}
