use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `gridlink::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while orchestrating cluster connections.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(crate) endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    /// Malformed endpoint address string
    AddressFormat,
    /// The client was started twice
    AlreadyStarted,
    /// Invalid client configuration
    Configuration,
    /// OS-level connection establishment failure (unreachable host, refused connection)
    Os,
    /// Protocol-level failure below the handshake (framing, send on closed connection)
    Protocol,
    /// Malformed or rejected handshake response
    Handshake,
    /// Framing codec failure
    Codec,
}

impl Error {
    pub(crate) fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                endpoint: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub(crate) fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// Attach the endpoint this error relates to, for diagnostics.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Error {
        self.inner.endpoint = Some(endpoint.into());
        self
    }

    /// Get the endpoint associated with this error, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.inner.endpoint.as_deref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("gridlink::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref endpoint) = self.inner.endpoint {
            f.field("endpoint", endpoint);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::AddressFormat => f.write_str("can not parse address range")?,
            Kind::AlreadyStarted => f.write_str("client is already started")?,
            Kind::Configuration => f.write_str("invalid client configuration")?,
            Kind::Os => f.write_str("connection establishment error")?,
            Kind::Protocol => f.write_str("protocol error")?,
            Kind::Handshake => f.write_str("handshake error")?,
            Kind::Codec => f.write_str("framing codec error")?,
        }

        if let Some(ref endpoint) = self.inner.endpoint {
            write!(f, " ({endpoint})")?;
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
