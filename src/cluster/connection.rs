//! Handle of one established cluster connection.

use crate::error::Result;
use crate::protocol::NodeProtocol;
use crate::transport::ConnectionId;

/// One established transport connection together with its protocol state.
///
/// Created when the transport reports connection success; shared between the
/// registry and any in-flight callback holding a temporary reference. The
/// registry is the sole authority on whether a handle is live.
pub struct NodeConnection {
    id: ConnectionId,
    protocol: Box<dyn NodeProtocol>,
}

impl NodeConnection {
    pub(crate) fn new(id: ConnectionId, protocol: Box<dyn NodeProtocol>) -> Self {
        Self { id, protocol }
    }

    /// Identifier assigned by the transport layer.
    #[must_use]
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// `true` once the handshake response was accepted and the connection is
    /// usable as a channel for application traffic.
    #[must_use]
    pub fn is_handshake_complete(&self) -> bool {
        self.protocol.is_handshake_complete()
    }

    /// Access the per-connection protocol handler, for sending application
    /// requests on a channel obtained from
    /// [`ClusterConnection::get_random_channel`](crate::cluster::ClusterConnection::get_random_channel).
    #[must_use]
    pub fn protocol(&self) -> &dyn NodeProtocol {
        &*self.protocol
    }

    pub(crate) fn handshake(&self) -> Result<bool> {
        self.protocol.handshake()
    }

    pub(crate) fn process_handshake_rsp(&self, msg: &[u8]) -> Result<()> {
        self.protocol.process_handshake_rsp(msg)
    }

    pub(crate) fn process_message(&self, msg: &[u8]) {
        self.protocol.process_message(msg);
    }
}

impl std::fmt::Debug for NodeConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeConnection")
            .field("id", &self.id)
            .field("handshake_complete", &self.is_handshake_complete())
            .finish()
    }
}
