use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error is a malformed endpoint address string.
    #[must_use]
    pub fn is_address_format(&self) -> bool {
        matches!(self.inner.kind, Kind::AddressFormat)
    }

    /// Returns true if the error came from starting an already-started client.
    #[must_use]
    pub fn is_already_started(&self) -> bool {
        matches!(self.inner.kind, Kind::AlreadyStarted)
    }

    /// Returns true if the error is an invalid configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self.inner.kind, Kind::Configuration)
    }

    /// Returns true if the error is an OS-level connection establishment
    /// failure, as opposed to a protocol-level one. Only these resolve the
    /// initial-connect notification from `on_connection_error`.
    #[must_use]
    pub fn is_os(&self) -> bool {
        matches!(self.inner.kind, Kind::Os)
    }

    /// Returns true if the error is a protocol-level failure.
    #[must_use]
    pub fn is_protocol(&self) -> bool {
        matches!(self.inner.kind, Kind::Protocol)
    }

    /// Returns true if the error is a handshake failure.
    #[must_use]
    pub fn is_handshake(&self) -> bool {
        matches!(self.inner.kind, Kind::Handshake)
    }

    /// Returns true if the error is a framing codec failure.
    #[must_use]
    pub fn is_codec(&self) -> bool {
        matches!(self.inner.kind, Kind::Codec)
    }
}
