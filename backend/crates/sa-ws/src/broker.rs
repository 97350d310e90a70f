use crate::{BroadcastConfig, CenterBroadcaster, ConnectionLimits, ConnectionRegistry};

/// Session bookkeeping plus the control-plane fan-out.
///
/// Built once at startup and handed to every handler and session by clone.
/// The registry and the broadcaster share no lock.
#[derive(Clone)]
pub struct Broker {
    registry: ConnectionRegistry,
    broadcaster: CenterBroadcaster,
}

impl Broker {
    pub fn new(limits: ConnectionLimits, broadcast: BroadcastConfig) -> Self {
        Self {
            registry: ConnectionRegistry::new(limits),
            broadcaster: CenterBroadcaster::new(broadcast),
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn broadcaster(&self) -> &CenterBroadcaster {
        &self.broadcaster
    }
}

impl Default for Broker {
    fn default() -> Self {
        Self::new(ConnectionLimits::default(), BroadcastConfig::default())
    }
}
