//! Error types for the MCP server.
//!
//! Per-call backend failures never reach this type: tool handlers turn them
//! into error results. What remains are the startup failures that stop the
//! process.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failed to start or terminated abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::config("MCP_TCP_PORT must be a port number").to_string(),
            "Configuration error: MCP_TCP_PORT must be a port number"
        );

        let err: Error = TransportError::init("connection closed").into();
        assert!(err.to_string().starts_with("Transport error:"));
    }
}
