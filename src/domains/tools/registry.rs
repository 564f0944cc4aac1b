//! Tool Registry - the fixed catalog of tools this server exposes.

use rmcp::model::Tool;

use super::definitions::{
    GetAiDetailTool, GetAiSimpleTool, GetAllSimpleTool, GetEntitiesSimpleTool, GetEnumsSimpleTool,
};

/// Tool registry - names and metadata of every available tool.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetEntitiesSimpleTool::NAME,
            GetEnumsSimpleTool::NAME,
            GetAllSimpleTool::NAME,
            GetAiSimpleTool::NAME,
            GetAiDetailTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetEntitiesSimpleTool::to_tool(),
            GetEnumsSimpleTool::to_tool(),
            GetAllSimpleTool::to_tool(),
            GetAiSimpleTool::to_tool(),
            GetAiDetailTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"get_entities_simple"));
        assert!(names.contains(&"get_enums_simple"));
        assert!(names.contains(&"get_all_simple"));
        assert!(names.contains(&"get_ai_simple"));
        assert!(names.contains(&"get_ai_detail"));
    }

    #[test]
    fn test_tool_names_unique() {
        let names = ToolRegistry::tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_every_tool_has_description() {
        for tool in ToolRegistry::get_all_tools() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "{} has no description", tool.name);
        }
    }

    #[test]
    fn test_every_schema_is_object_with_properties() {
        for tool in ToolRegistry::get_all_tools() {
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema is not an object",
                tool.name
            );
            assert!(
                tool.input_schema
                    .get("properties")
                    .is_some_and(|p| p.is_object()),
                "{} schema has no properties",
                tool.name
            );
        }
    }

    #[test]
    fn test_only_ai_tools_require_input() {
        for tool in ToolRegistry::get_all_tools() {
            let requires_input = tool
                .input_schema
                .get("required")
                .and_then(|r| r.as_array())
                .is_some_and(|r| r.iter().any(|v| v == "input"));
            assert_eq!(
                requires_input,
                tool.name.starts_with("get_ai_"),
                "unexpected schema for {}",
                tool.name
            );
        }
    }
}
