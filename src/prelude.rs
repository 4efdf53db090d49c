//! Gridlink prelude.
//!
//! This module contains the essential types end users need to drive the
//! cluster connection layer. Only canonical public API types belong here.

// Address specification and endpoints
pub use crate::addr::{EndPoint, TcpRange, DEFAULT_TCP_PORT};

// Orchestrator and channel handle
pub use crate::cluster::{ClusterConnection, InitialConnectCallback, NodeConnection};

// Configuration
pub use crate::config::ClientConfig;

// Error types
pub use crate::error::{Error, Result};

// Collaborator seams
pub use crate::protocol::{NodeProtocol, ProtocolFactory};
pub use crate::transport::{ConnectionEventHandler, ConnectionId, TransportPool, TransportPoolFactory};
