//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the backend client, the MCP server handler
//! and the transport layer.

pub mod backend;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use backend::{BackendClient, BackendConfig, BackendError};
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
