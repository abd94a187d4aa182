//! Type definitions and aliases

use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// A UDP echo endpoint to probe
///
/// The echo port is fixed by the wire protocol; only the host part is
/// configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Hostname or IP address of the echo endpoint
    pub host: String,
    /// UDP port the endpoint listens on
    pub port: u16,
}

impl Target {
    /// Create a target on the standard echo port
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            port: crate::defaults::ECHO_PORT,
        }
    }

    /// Create a target on an explicit port
    pub fn with_port<S: Into<String>>(host: S, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Resolve the target to a socket address
    pub fn resolve(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| AppError::socket(format!("Failed to resolve {}: {}", self, e)))?
            .next()
            .ok_or_else(|| AppError::socket(format!("No addresses found for {}", self)))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        let target = Target::new("example.com");
        assert_eq!(target.to_string(), "example.com:12345");
    }

    #[test]
    fn test_target_resolve_loopback() {
        let target = Target::with_port("127.0.0.1", 9999);
        let addr = target.resolve().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9999);
    }

    #[test]
    fn test_target_resolve_invalid_host() {
        let target = Target::new("this.host.does.not.exist.invalid");
        assert!(target.resolve().is_err());
    }
}
