//! AI recommendation tool (full structures).
//!
//! Like `get_ai_simple`, but the backend returns every matching entity and
//! enum with its attribute descriptions, e.g. `<用户,User>:{name:姓名、age:年龄}`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{QuestionParams, forward_to_result, parse_arguments};
use crate::core::backend::{BackendClient, BackendRequest};

/// AI-recommended entities and enums for an input, with full attribute detail.
pub struct GetAiDetailTool;

impl GetAiDetailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_ai_detail";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "获取经过AI推荐的 和输入相关的 所有实体和枚举详细结构(包含详细属性说明，如：<用户,User>:{name:姓名、age:年龄})";

    /// Backend path.
    pub const PATH: &'static str = "/ai/detail";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(input = %params.input))]
    pub async fn execute(params: &QuestionParams, backend: &BackendClient) -> CallToolResult {
        info!("Calling {} with input: {}", Self::NAME, params.input);
        forward_to_result(
            Self::NAME,
            backend,
            BackendRequest::post(Self::PATH, params.to_body()),
        )
        .await
    }

    /// Validate raw call arguments, then execute.
    pub async fn handle(
        arguments: Option<JsonObject>,
        backend: &BackendClient,
    ) -> Result<CallToolResult, McpError> {
        let params: QuestionParams = parse_arguments(arguments)?;
        Ok(Self::execute(&params, backend).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<QuestionParams>(),
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
