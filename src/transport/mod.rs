//! Transport collaborator interfaces.
//!
//! The byte-level transport is external to this crate. The orchestrator sees
//! it through [`TransportPool`] (open/close connections, send frames) and the
//! transport sees the orchestrator through [`ConnectionEventHandler`] (the
//! five connection lifecycle callbacks). A pool is built once per `start`
//! through [`TransportPoolFactory`], with the framing codec filters installed
//! at construction.
//!
//! The transport invokes the handler callbacks from its own worker threads:
//! one call at a time per connection id, with no ordering guarantee across
//! different ids. Implementations of [`ConnectionEventHandler`] must tolerate
//! fully concurrent invocation.

pub mod codec;

use std::sync::Arc;

use bytes::Bytes;

use crate::addr::{EndPoint, TcpRange};
use crate::error::{Error, Result};

pub use codec::{Codec, CodecFactory, LengthPrefixCodec, LengthPrefixCodecFactory};

/// Identifier of one transport connection. Assigned by the transport layer,
/// unique among currently-open connections, not reused while still registered.
pub type ConnectionId = u64;

/// Receiver of connection lifecycle events from the transport pool.
pub trait ConnectionEventHandler: Send + Sync {
    /// A TCP connection to `addr` completed; `id` identifies it from now on.
    fn on_connection_success(&self, addr: &EndPoint, id: ConnectionId);

    /// A connection attempt to `addr` failed before it was established.
    fn on_connection_error(&self, addr: &EndPoint, err: Error);

    /// Connection `id` was closed, locally or by the peer.
    fn on_connection_closed(&self, id: ConnectionId, err: Option<Error>);

    /// One complete frame arrived on connection `id`.
    fn on_message_received(&self, id: ConnectionId, msg: Bytes);

    /// A previously queued frame finished sending on connection `id`.
    fn on_message_sent(&self, id: ConnectionId);
}

/// A pool of asynchronous client connections.
pub trait TransportPool: Send + Sync {
    /// Register the handler that receives lifecycle callbacks. Must be called
    /// before [`TransportPool::start`]. The pool holds the handler only for
    /// its own lifetime; `stop` releases it.
    fn set_handler(&self, handler: Arc<dyn ConnectionEventHandler>);

    /// Open up to `connection_limit` concurrent connections across `addrs`.
    fn start(&self, addrs: Vec<TcpRange>, connection_limit: usize) -> Result<()>;

    /// Request all connections to close. Idempotent. Closures surface later as
    /// `on_connection_closed` callbacks.
    fn stop(&self);

    /// Queue one frame for sending on connection `id`.
    ///
    /// Returns `Ok(false)` when the connection is already closed locally, and
    /// an error on a protocol-level send failure. Completion is reported
    /// asynchronously via `on_message_sent`.
    fn send(&self, id: ConnectionId, data: Bytes) -> Result<bool>;
}

/// Builds a [`TransportPool`] with the given codec filters installed in front
/// of every connection.
pub trait TransportPoolFactory: Send + Sync {
    fn make_pool(&self, filters: Vec<Arc<dyn CodecFactory>>) -> Arc<dyn TransportPool>;
}
