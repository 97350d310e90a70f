use crate::{
    ConnectionId, ConnectionInfo, ConnectionLimits, Registration, Result as WsErrorResult,
    WsError,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::watch;

/// Registry of live streaming sessions.
///
/// A single mutex guards the map. It is only ever held for the map operation
/// itself, never across an `.await`, so a stalled client cannot block
/// registration or fan-out for anyone else.
pub struct ConnectionRegistry {
    inner: Arc<RegistryInner>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    connections: Mutex<HashMap<ConnectionId, ConnectionInfo>>,
    /// Live count, published after every mutation while the lock is held
    count_tx: watch::Sender<usize>,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        let (count_tx, _) = watch::channel(0);
        Self {
            inner: Arc::new(RegistryInner {
                connections: Mutex::new(HashMap::new()),
                count_tx,
            }),
            limits,
        }
    }

    /// Register a new session. The returned guard unregisters it on drop.
    #[track_caller]
    pub fn register(&self) -> WsErrorResult<Registration> {
        let mut connections = self.lock();

        if connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        connections.insert(
            connection_id,
            ConnectionInfo {
                connection_id,
                connected_at: chrono::Utc::now(),
            },
        );
        self.inner.count_tx.send_replace(connections.len());

        info!(
            "Registered connection {connection_id} ({} total)",
            connections.len()
        );

        Ok(Registration::new(self.clone(), connection_id))
    }

    /// Unregister a session. Returns false if it was already gone.
    pub fn unregister(&self, connection_id: ConnectionId) -> bool {
        let mut connections = self.lock();

        let removed = connections.remove(&connection_id).is_some();
        if removed {
            self.inner.count_tx.send_replace(connections.len());
            info!(
                "Unregistered connection {connection_id} ({} total remaining)",
                connections.len()
            );
        }
        removed
    }

    /// Visit every live session under the registry lock.
    ///
    /// `f` must not block; the lock is held for the whole iteration.
    pub fn for_each_live<F>(&self, mut f: F)
    where
        F: FnMut(&ConnectionInfo),
    {
        let connections = self.lock();
        connections.values().for_each(|info| f(info));
    }

    pub fn total_count(&self) -> usize {
        self.lock().len()
    }

    pub fn is_full(&self) -> bool {
        self.total_count() >= self.limits.max_total
    }

    /// Watch the live session count.
    pub fn watch_count(&self) -> watch::Receiver<usize> {
        self.inner.count_tx.subscribe()
    }

    /// Resolve once no session is registered.
    pub async fn wait_until_empty(&self) {
        let mut count_rx = self.watch_count();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = count_rx.wait_for(|&count| count == 0).await;
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ConnectionId, ConnectionInfo>> {
        // Entries stay consistent even if a holder panicked mid-iteration.
        self.inner
            .connections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
