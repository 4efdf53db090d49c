//! Per-connection protocol handler interface.
//!
//! The handshake wire format and post-handshake message dispatch live outside
//! this crate. The orchestrator drives them through [`NodeProtocol`]: it sends
//! the handshake right after a connection is established, feeds the first
//! inbound frame to `process_handshake_rsp`, and routes every later frame to
//! `process_message`. One handler exists per connection, created through
//! [`ProtocolFactory`] when the transport reports connection success.

use std::sync::Arc;

use crate::error::Result;
use crate::transport::{ConnectionId, TransportPool};

/// Protocol state machine of a single connection.
///
/// The transport serializes callbacks per connection id, but
/// `get_random_channel` hands the owning handle to arbitrary caller threads,
/// so implementations must be internally synchronized.
pub trait NodeProtocol: Send + Sync {
    /// Identifier of the connection this handler drives.
    fn id(&self) -> ConnectionId;

    /// Send the handshake request.
    ///
    /// Returns `Ok(false)` when the connection is already closed locally and
    /// a protocol error when building or queueing the request fails.
    fn handshake(&self) -> Result<bool>;

    /// Consume the handshake response frame, completing the handshake on
    /// success. Fails with a handshake error on a malformed or rejected
    /// response.
    fn process_handshake_rsp(&self, msg: &[u8]) -> Result<()>;

    /// `true` once the handshake response was accepted.
    fn is_handshake_complete(&self) -> bool;

    /// Dispatch one post-handshake frame.
    fn process_message(&self, msg: &[u8]);
}

/// Creates the [`NodeProtocol`] for a newly established connection.
///
/// The handler gets a shared handle to the transport pool so it can queue its
/// own sends without routing them through the orchestrator.
pub trait ProtocolFactory: Send + Sync {
    fn create(&self, id: ConnectionId, pool: Arc<dyn TransportPool>) -> Box<dyn NodeProtocol>;
}
