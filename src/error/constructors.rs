use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for an endpoint string that failed to parse.
pub fn address_format(addr: impl Into<String>) -> Error {
    Error::new(Kind::AddressFormat).with_endpoint(addr)
}

/// Creates an `Error` for a second `start` on a running client.
pub fn already_started() -> Error {
    Error::new(Kind::AlreadyStarted)
}

/// Creates an `Error` for an invalid client configuration.
pub fn configuration<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Configuration).with(e.into())
}

/// Creates an `Error` for an OS-level connection establishment failure.
pub fn os<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Os).with(e.into())
}

/// Creates an `Error` for a protocol-level failure.
pub fn protocol<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Protocol).with(e.into())
}

/// Creates an `Error` for a malformed or rejected handshake response.
pub fn handshake<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Handshake).with(e.into())
}

/// Creates an `Error` for a framing codec failure.
pub fn codec<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Codec).with(e.into())
}
