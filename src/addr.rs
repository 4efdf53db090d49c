//! Endpoint address specification parsing.
//!
//! A [`TcpRange`] is one entry of the client's endpoint list, written as
//! `host`, `host:port`, or `host:port..port+range`. It denotes the inclusive
//! port interval `[port, port + range]` on `host` and expands to the candidate
//! [`EndPoint`]s the transport pool will try. Parsing performs no network
//! access.

use std::cmp::Ordering;
use std::fmt;

/// Port used when an endpoint string carries no explicit port.
pub const DEFAULT_TCP_PORT: u16 = 10800;

/// A single concrete endpoint as reported by the transport pool in
/// connection lifecycle callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndPoint {
    pub host: String,
    pub port: u16,
}

impl EndPoint {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for EndPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// An inclusive range of ports `[port, port + range]` on a single host.
///
/// Immutable once parsed; consumed when building the initial set of candidate
/// endpoints. Ordered lexicographically by `(host, port, range)` so endpoint
/// lists can be sorted and deduplicated deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TcpRange {
    pub host: String,
    pub port: u16,
    /// Number of ports after `port` also covered by this range.
    pub range: u16,
}

impl TcpRange {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, range: u16) -> Self {
        Self {
            host: host.into(),
            port,
            range,
        }
    }

    /// Parse an endpoint specification string.
    ///
    /// Accepts `host`, `host:port`, and `host:port..port+range`; `default_port`
    /// is used when no port is given. Returns `None` on an empty host, a
    /// malformed port, a reversed range, or a range whose upper bound does not
    /// fit the 16-bit port space.
    #[must_use]
    pub fn parse(addr: &str, default_port: u16) -> Option<TcpRange> {
        let (host, ports) = match addr.rfind(':') {
            Some(idx) => (&addr[..idx], Some(&addr[idx + 1..])),
            None => (addr, None),
        };

        if host.is_empty() {
            return None;
        }

        let Some(ports) = ports else {
            return Some(TcpRange::new(host, default_port, 0));
        };

        let (port, range) = match ports.find("..") {
            Some(idx) => {
                let from: u16 = ports[..idx].parse().ok()?;
                let to: u16 = ports[idx + 2..].parse().ok()?;
                (from, to.checked_sub(from)?)
            }
            None => (ports.parse().ok()?, 0),
        };

        Some(TcpRange::new(host, port, range))
    }

    /// Candidate endpoints of this range, in ascending port order.
    pub fn endpoints(&self) -> impl Iterator<Item = EndPoint> + '_ {
        (self.port..=self.port.saturating_add(self.range)).map(|port| EndPoint::new(&self.host, port))
    }

    /// `true` iff the range covers no host at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.host.is_empty()
    }
}

impl fmt::Display for TcpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)?;
        if self.range != 0 {
            write!(f, "..{}", self.port + self.range)?;
        }
        Ok(())
    }
}

impl Ord for TcpRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.host
            .cmp(&other.host)
            .then(self.port.cmp(&other.port))
            .then(self.range.cmp(&other.range))
    }
}

impl PartialOrd for TcpRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
