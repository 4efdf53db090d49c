//! # Gridlink
//!
//! Connection-orchestration core of a grid database client: turns a list of
//! server addresses into a live pool of authenticated connections, tracks
//! their handshake state, routes outbound requests to a random established
//! channel, and reports the outcome of the first connection attempt through a
//! one-shot completion callback.
//!
//! The byte-level transport, the handshake wire format, and per-connection
//! message dispatch are external collaborators, plugged in through the
//! [`transport`] and [`protocol`] traits.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gridlink::prelude::*;
//!
//! fn connect(
//!     pools: Arc<dyn gridlink::transport::TransportPoolFactory>,
//!     protocols: Arc<dyn gridlink::protocol::ProtocolFactory>,
//! ) -> gridlink::Result<()> {
//!     let config = ClientConfig::new(["db.local:10800..10802"]).with_connection_limit(4);
//!     let cluster = ClusterConnection::new(config, pools, protocols);
//!
//!     cluster.start(|res| match res {
//!         Ok(()) => tracing::info!("connected"),
//!         Err(err) => tracing::error!("connection failed: {err}"),
//!     })?;
//!
//!     // Later, from any thread:
//!     if let Some(channel) = cluster.get_random_channel() {
//!         let _ = channel.id();
//!     }
//!
//!     cluster.stop();
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod addr;
pub mod cluster;
pub mod config;
pub mod error;
pub mod protocol;
pub mod transport;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
