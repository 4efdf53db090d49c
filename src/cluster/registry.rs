//! Concurrency-safe connection registry.
//!
//! Maps connection ids to live [`NodeConnection`] handles. A handle is
//! reachable through the registry if and only if its connection is usable for
//! new outbound traffic and for routing inbound frames; removal from the
//! registry is the only destruction trigger.
//!
//! Every operation acquires the single internal mutex exactly once for its
//! whole duration. Call paths that need "insert, then on failure remove" do so
//! as two sequential acquisitions, never nested, so no re-entrant lock is
//! required.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::cluster::connection::NodeConnection;
use crate::transport::ConnectionId;

#[derive(Default)]
pub(crate) struct ConnectionRegistry {
    connections: Mutex<HashMap<ConnectionId, Arc<NodeConnection>>>,
}

impl ConnectionRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ConnectionId, Arc<NodeConnection>>> {
        match self.connections.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::error!(
                    target: "gridlink::cluster",
                    "connection registry mutex poisoned, recovering"
                );
                poisoned.into_inner()
            }
        }
    }

    /// Insert a handle, returning `false` when `id` was already present.
    /// A duplicate id replaces the previous handle.
    pub(crate) fn insert(&self, id: ConnectionId, connection: Arc<NodeConnection>) -> bool {
        self.lock().insert(id, connection).is_none()
    }

    pub(crate) fn remove(&self, id: ConnectionId) {
        self.lock().remove(&id);
    }

    pub(crate) fn get(&self, id: ConnectionId) -> Option<Arc<NodeConnection>> {
        self.lock().get(&id).cloned()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    /// Pick one registered handle uniformly at random.
    ///
    /// Size is snapshotted and the selected entry dereferenced under the same
    /// lock acquisition, so a concurrent removal cannot invalidate the drawn
    /// index. A single registered connection short-circuits the draw.
    pub(crate) fn random(&self) -> Option<Arc<NodeConnection>> {
        let connections = self.lock();

        if connections.is_empty() {
            return None;
        }

        if connections.len() == 1 {
            return connections.values().next().cloned();
        }

        let idx = fastrand::usize(..connections.len());
        connections.values().nth(idx).cloned()
    }
}
