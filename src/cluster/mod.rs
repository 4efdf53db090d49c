//! Cluster connection orchestration.
//!
//! [`ClusterConnection`] turns the configured endpoint list into a live pool
//! of handshaken connections. It owns the connection registry and the one-shot
//! initial-connect notification, implements the transport pool's lifecycle
//! callbacks, and hands out random established channels for outbound traffic.
//!
//! Locking discipline: the registry mutex and the notification mutex are
//! acquired disjointly, never nested. Callbacks arrive concurrently from the
//! transport's worker threads and never propagate failures back into the
//! transport; protocol failures are logged and converted into removal of the
//! affected connection.

mod connection;
mod registry;

use std::sync::{Arc, Mutex};

use bytes::Bytes;

use crate::addr::{EndPoint, TcpRange, DEFAULT_TCP_PORT};
use crate::config::ClientConfig;
use crate::error::{self, Error, Result};
use crate::protocol::ProtocolFactory;
use crate::transport::{
    CodecFactory, ConnectionEventHandler, ConnectionId, LengthPrefixCodecFactory, TransportPool,
    TransportPoolFactory,
};

pub use connection::NodeConnection;
use registry::ConnectionRegistry;

/// One-shot callback reporting the outcome of client startup.
pub type InitialConnectCallback = Box<dyn FnOnce(Result<()>) + Send + 'static>;

/// Orchestrates the client's connections to the cluster.
///
/// Create with [`ClusterConnection::new`], then call
/// [`start`](ClusterConnection::start) once. The completion callback fires
/// exactly once, from whichever transport thread resolves the first connection
/// attempt, with "first resolution wins" semantics: the first handshake
/// outcome or OS-level connection error to arrive latches the result and all
/// later outcomes are dropped silently.
pub struct ClusterConnection {
    config: ClientConfig,
    pool_factory: Arc<dyn TransportPoolFactory>,
    protocol_factory: Arc<dyn ProtocolFactory>,
    pool: Mutex<Option<Arc<dyn TransportPool>>>,
    connections: ConnectionRegistry,
    on_initial_connect: Mutex<Option<InitialConnectCallback>>,
}

impl ClusterConnection {
    /// Create a stopped cluster connection.
    pub fn new(
        config: ClientConfig,
        pool_factory: Arc<dyn TransportPoolFactory>,
        protocol_factory: Arc<dyn ProtocolFactory>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            pool_factory,
            protocol_factory,
            pool: Mutex::new(None),
            connections: ConnectionRegistry::new(),
            on_initial_connect: Mutex::new(None),
        })
    }

    /// Start establishing connections to the configured endpoints.
    ///
    /// Fails synchronously when the client is already started, the
    /// configuration is invalid, or an endpoint string does not parse (the
    /// error names the offending string). Otherwise builds a transport pool
    /// with the length-prefix framing filter installed, registers this
    /// instance as the pool's event handler, and asks the pool to open up to
    /// the configured number of connections. `on_complete` is invoked exactly
    /// once later, never synchronously from this call.
    pub fn start<F>(self: &Arc<Self>, on_complete: F) -> Result<()>
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let (pool, addrs) = {
            let mut guard = lock_ignore_poison(&self.pool);
            if guard.is_some() {
                return Err(error::already_started());
            }

            self.config.validate()?;

            let mut addrs = Vec::with_capacity(self.config.endpoints.len());
            for addr in &self.config.endpoints {
                let range = TcpRange::parse(addr, DEFAULT_TCP_PORT)
                    .ok_or_else(|| error::address_format(addr.clone()))?;
                addrs.push(range);
            }

            let filters: Vec<Arc<dyn CodecFactory>> = vec![Arc::new(LengthPrefixCodecFactory)];
            let pool = self.pool_factory.make_pool(filters);
            pool.set_handler(Arc::clone(self) as Arc<dyn ConnectionEventHandler>);
            *guard = Some(Arc::clone(&pool));
            (pool, addrs)
        };

        *lock_ignore_poison(&self.on_initial_connect) = Some(Box::new(on_complete));

        if let Err(err) = pool.start(addrs, self.config.connection_limit) {
            *lock_ignore_poison(&self.pool) = None;
            lock_ignore_poison(&self.on_initial_connect).take();
            return Err(err);
        }

        Ok(())
    }

    /// Request all connections to close.
    ///
    /// No-op when the client was never started. Idempotent and safe to call
    /// concurrently with any other operation; in-flight callbacks are not
    /// cancelled, and closures drain the registry as `on_connection_closed`
    /// events arrive.
    pub fn stop(&self) {
        let pool = lock_ignore_poison(&self.pool).clone();
        if let Some(pool) = pool {
            pool.stop();
        }
    }

    /// Get one established channel, selected uniformly at random among the
    /// currently registered connections. Returns `None` when no connection is
    /// registered.
    #[must_use]
    pub fn get_random_channel(&self) -> Option<Arc<NodeConnection>> {
        self.connections.random()
    }

    /// Resolve the initial-connect notification. Fires at most once; any
    /// resolution after the first observes the cleared slot and is dropped.
    fn initial_connect_result(&self, res: Result<()>) {
        let callback = lock_ignore_poison(&self.on_initial_connect).take();

        if let Some(callback) = callback {
            callback(res);
        }
    }

    fn remove_connection(&self, id: ConnectionId) {
        self.connections.remove(id);
    }
}

impl ConnectionEventHandler for ClusterConnection {
    fn on_connection_success(&self, addr: &EndPoint, id: ConnectionId) {
        tracing::info!(
            target: "gridlink::cluster",
            "established connection with remote host {addr}"
        );
        tracing::debug!(target: "gridlink::cluster", "connection id: {id}");

        let pool = lock_ignore_poison(&self.pool).clone();
        let Some(pool) = pool else {
            // The pool reported a connection while the client is not started.
            tracing::error!(
                target: "gridlink::cluster",
                "connection {id} reported on a stopped client"
            );
            return;
        };

        let connection = Arc::new(NodeConnection::new(
            id,
            self.protocol_factory.create(id, pool),
        ));

        if !self.connections.insert(id, Arc::clone(&connection)) {
            tracing::error!(
                target: "gridlink::cluster",
                "unknown error: connection is already in progress, connection id: {id}"
            );
        }

        match connection.handshake() {
            Ok(true) => {
                tracing::debug!(target: "gridlink::cluster", "handshake sent successfully");
            }
            Ok(false) => {
                tracing::warn!(
                    target: "gridlink::cluster",
                    "failed to send handshake request: connection already closed"
                );
                self.remove_connection(id);
            }
            Err(err) => {
                tracing::warn!(
                    target: "gridlink::cluster",
                    "failed to send handshake request: {err}"
                );
                self.remove_connection(id);
            }
        }
    }

    fn on_connection_error(&self, addr: &EndPoint, err: Error) {
        tracing::warn!(
            target: "gridlink::cluster",
            "failed to establish connection with remote host {addr}, reason: {err}"
        );

        if err.is_os() {
            self.initial_connect_result(Err(err));
        }
    }

    fn on_connection_closed(&self, id: ConnectionId, err: Option<Error>) {
        match err {
            Some(err) => tracing::debug!(
                target: "gridlink::cluster",
                "closed connection id {id}, error: {err}"
            ),
            None => tracing::debug!(target: "gridlink::cluster", "closed connection id {id}"),
        }

        self.remove_connection(id);
    }

    fn on_message_received(&self, id: ConnectionId, msg: Bytes) {
        tracing::debug!(
            target: "gridlink::cluster",
            "message on connection id {id}, size: {}",
            msg.len()
        );

        let Some(connection) = self.connections.get(id) else {
            // Already removed by a racing close; drop the frame.
            return;
        };

        if connection.is_handshake_complete() {
            connection.process_message(&msg);
            return;
        }

        let res = connection.process_handshake_rsp(&msg);
        if res.is_err() {
            self.remove_connection(connection.id());
        }

        self.initial_connect_result(res);
    }

    fn on_message_sent(&self, id: ConnectionId) {
        tracing::debug!(
            target: "gridlink::cluster",
            "message sent successfully on connection id {id}"
        );
    }
}

fn lock_ignore_poison<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::error!(target: "gridlink::cluster", "cluster mutex poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
