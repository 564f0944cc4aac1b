//! Tool Router - builds the rmcp ToolRouter from the tool definitions.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::backend::BackendClient;

use super::definitions::{
    GetAiDetailTool, GetAiSimpleTool, GetAllSimpleTool, GetEntitiesSimpleTool, GetEnumsSimpleTool,
};

/// Build the tool router with all registered tools.
///
/// Every route forwards through the same backend client.
pub fn build_tool_router<S>(backend: Arc<BackendClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetEntitiesSimpleTool::create_route(backend.clone()))
        .with_route(GetEnumsSimpleTool::create_route(backend.clone()))
        .with_route(GetAllSimpleTool::create_route(backend.clone()))
        .with_route(GetAiSimpleTool::create_route(backend.clone()))
        .with_route(GetAiDetailTool::create_route(backend))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::backend::BackendConfig;

    struct TestServer {}

    fn test_backend() -> Arc<BackendClient> {
        Arc::new(BackendClient::with_config(BackendConfig::new(
            "http://localhost:1",
        )))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_backend());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_all_simple"));
        assert!(names.contains(&"get_ai_detail"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_backend());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
