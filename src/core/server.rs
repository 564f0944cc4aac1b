//! MCP Server implementation.
//!
//! The server advertises the tools capability only. Tool calls are routed by
//! `rmcp` through the `ToolRouter` built in `domains/tools/router.rs`; this
//! file does not need to change when a tool is added.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::backend::BackendClient;
use super::config::Config;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server whose tools read backend settings from the environment
    /// on every call.
    pub fn new(config: Config) -> Self {
        Self::with_backend(config, BackendClient::from_env())
    }

    /// Create a server whose tools forward through the given client.
    pub fn with_backend(config: Config, backend: BackendClient) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(Arc::new(backend)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Looks up entity and enum definitions from the catalog backend. \
                 Use get_ai_simple or get_ai_detail to find the types relevant to a question."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::BackendConfig;

    fn test_server() -> McpServer {
        McpServer::with_backend(
            Config::default(),
            BackendClient::with_config(BackendConfig::new("http://localhost:1")),
        )
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "entity-enum-server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_server_lists_five_tools() {
        let tools = test_server().tool_router.list_all();
        assert_eq!(tools.len(), 5);
    }
}
