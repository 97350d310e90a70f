use crate::{ConnectionId, ConnectionRegistry};

/// Keeps a session in the registry for exactly as long as it is alive.
///
/// Dropping the guard unregisters the session, on every exit path of the send
/// loop, including unwinding.
pub struct Registration {
    registry: ConnectionRegistry,
    connection_id: ConnectionId,
}

impl Registration {
    pub(crate) fn new(registry: ConnectionRegistry, connection_id: ConnectionId) -> Self {
        Self {
            registry,
            connection_id,
        }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.registry.unregister(self.connection_id);
    }
}
