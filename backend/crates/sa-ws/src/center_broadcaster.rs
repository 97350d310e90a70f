use crate::{BroadcastConfig, BroadcastMessage};

use tokio::sync::broadcast;

/// Fan-out path from the control endpoint to every live session.
///
/// Backed by one bounded `tokio::sync::broadcast` ring:
/// - publishing never waits; with no subscribers the message is dropped
/// - a subscriber only sees messages sent after it subscribed
/// - a subscriber more than `channel_capacity` messages behind loses the
///   oldest ones (drop-oldest) and resumes at the oldest retained message
#[derive(Clone)]
pub struct CenterBroadcaster {
    sender: broadcast::Sender<BroadcastMessage>,
    config: BroadcastConfig,
}

impl CenterBroadcaster {
    pub fn new(config: BroadcastConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self { sender, config }
    }

    /// Subscribe to messages published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastMessage> {
        let receiver = self.sender.subscribe();
        log::debug!(
            "Session subscribed to broadcasts ({} total subscribers)",
            self.sender.receiver_count()
        );
        receiver
    }

    /// Publish to every current subscriber, returning how many will see it.
    pub fn publish(&self, message: BroadcastMessage) -> usize {
        let message_type = message.message_type();
        match self.sender.send(message) {
            Ok(receiver_count) => {
                log::debug!(
                    "Broadcast {} message to {} receivers",
                    message_type,
                    receiver_count
                );
                receiver_count
            }
            Err(_) => {
                // No active receivers - nothing to deliver, nothing retained
                log::debug!("Broadcast {} message had no active receivers", message_type);
                0
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn capacity(&self) -> usize {
        self.config.channel_capacity
    }
}
