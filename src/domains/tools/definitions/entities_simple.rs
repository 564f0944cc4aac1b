//! Entity list tool.
//!
//! Returns the brief listing of every entity known to the backend: table name
//! and English name.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{NoParams, forward_to_result, no_params_schema, parse_arguments};
use crate::core::backend::{BackendClient, BackendRequest};

/// Lists all entities in brief form.
pub struct GetEntitiesSimpleTool;

impl GetEntitiesSimpleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_entities_simple";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "获取所有实体列简要信息(表名称和英文名)";

    /// Backend path.
    pub const PATH: &'static str = "/entities/simple";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(_params: &NoParams, backend: &BackendClient) -> CallToolResult {
        info!("Calling {}", Self::NAME);
        forward_to_result(Self::NAME, backend, BackendRequest::get(Self::PATH)).await
    }

    /// Validate raw call arguments, then execute.
    pub async fn handle(
        arguments: Option<JsonObject>,
        backend: &BackendClient,
    ) -> Result<CallToolResult, McpError> {
        let params: NoParams = parse_arguments(arguments)?;
        Ok(Self::execute(&params, backend).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: no_params_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>(backend: Arc<BackendClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let backend = backend.clone();
            async move { Self::handle(args, &backend).await }.boxed()
        })
    }
}
