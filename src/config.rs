//! Client configuration.
//!
//! Provides the connection-orchestration settings consumed by
//! [`ClusterConnection::start`](crate::cluster::ClusterConnection::start):
//! the endpoint address list and the concurrent connection limit.

use crate::error::{self, Result};

/// Default number of connections the client keeps open concurrently.
pub const DEFAULT_CONNECTION_LIMIT: usize = 4;

/// Runtime client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint specifications in `host[:port[..port+range]]` syntax.
    pub endpoints: Vec<String>,
    /// Maximum number of connections opened across the endpoint list.
    pub connection_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            connection_limit: DEFAULT_CONNECTION_LIMIT,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(endpoints: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            endpoints: endpoints.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the maximum number of concurrently open connections.
    #[must_use]
    pub fn with_connection_limit(mut self, limit: usize) -> Self {
        self.connection_limit = limit;
        self
    }

    /// Validate the configuration before the client starts.
    pub fn validate(&self) -> Result<()> {
        if self.endpoints.is_empty() {
            return Err(error::configuration("endpoint list cannot be empty"));
        }
        if self.connection_limit == 0 {
            return Err(error::configuration(
                "connection limit must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_endpoints() {
        let config = ClientConfig::default();
        assert!(config.endpoints.is_empty());
        assert_eq!(config.connection_limit, DEFAULT_CONNECTION_LIMIT);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_connection_limit() {
        let config = ClientConfig::new(["db.local:10800"]).with_connection_limit(0);
        let err = config.validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_validate_accepts_populated_config() {
        let config = ClientConfig::new(["db.local:10800..10802", "fallback.local"]);
        assert!(config.validate().is_ok());
    }
}
