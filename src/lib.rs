//! Entity/Enum MCP Server Library
//!
//! Exposes a catalog backend's entity and enum endpoints as Model Context
//! Protocol tools. Each tool call becomes one HTTP request to the backend;
//! the `data` field of the response is returned to the client as text.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the backend client, the server
//!   handler and the transports
//! - **domains::tools**: the five catalog tools and their router
//!
//! # Example
//!
//! ```rust,no_run
//! use entity_enum_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
