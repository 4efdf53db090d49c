//! Error types for cluster connection orchestration.
//!
//! The crate uses a single opaque [`Error`] carrying an internal kind, an
//! optional source error, and the endpoint it relates to when known. Free
//! constructor functions live in this module (`error::os(..)`,
//! `error::handshake(..)`, ...), classification predicates on [`Error`]
//! itself (`is_os()`, `is_handshake()`, ...).

mod classification;
mod constructors;
mod types;

pub use constructors::{
    address_format, already_started, codec, configuration, handshake, os, protocol,
};
pub use types::{Error, Result};
