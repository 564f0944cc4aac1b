//! Common utilities shared across the catalog tools.
//!
//! Parameter types, argument parsing, and the conversion of backend outcomes
//! into `CallToolResult`s.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::backend::{BackendClient, BackendError, BackendRequest};

/// Marker prefixed to every error text returned to clients.
pub const ERROR_MARKER: &str = "错误: ";

/// Parameters for tools that take no input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoParams {}

/// Input schema for tools that take no input.
///
/// Always carries an empty `properties` map; some MCP clients reject object
/// schemas without one.
pub fn no_params_schema() -> Arc<JsonObject> {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), json!({}));
    Arc::new(schema)
}

/// Parameters for the AI recommendation tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QuestionParams {
    /// Free-form text to find related entities and enums for.
    #[schemars(description = "输入内容")]
    pub input: String,
}

impl QuestionParams {
    /// Request body understood by the `/ai/*` endpoints.
    pub fn to_body(&self) -> Value {
        json!({ "question": self.input })
    }
}

/// Deserialize tool call arguments into a params struct.
///
/// Missing arguments are treated as an empty object. A mismatch is reported
/// as `invalid_params` so the tool body never runs.
pub fn parse_arguments<P: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Forward `request` and turn the outcome into a tool result.
pub async fn forward_to_result(
    tool: &str,
    backend: &BackendClient,
    request: BackendRequest,
) -> CallToolResult {
    match backend.forward(&request).await {
        Ok(payload) => {
            info!("{} succeeded", tool);
            payload_result(payload)
        }
        Err(e) => error_result(&e),
    }
}

/// Wrap a backend payload as text: strings verbatim, anything else as compact JSON.
pub fn payload_result(payload: Value) -> CallToolResult {
    let text = match payload {
        Value::String(s) => s,
        other => other.to_string(),
    };
    CallToolResult::success(vec![Content::text(text)])
}

/// Render a backend failure as an error result.
pub fn error_result(err: &BackendError) -> CallToolResult {
    warn!(status = ?err.status(), "Request failed: {}", err);
    CallToolResult::error(vec![Content::text(format!("{}{}", ERROR_MARKER, err))])
}

/// Extract the text of the first content item of a result.
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_payload_string_is_verbatim() {
        let result = payload_result(json!("<用户,User>"));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), "<用户,User>");
    }

    #[test]
    fn test_payload_object_is_compact_json() {
        let result = payload_result(json!({"entities": [], "enums": []}));
        assert_eq!(result_text(&result), r#"{"entities":[],"enums":[]}"#);
    }

    #[test]
    fn test_payload_null_and_numbers() {
        assert_eq!(result_text(&payload_result(Value::Null)), "null");
        assert_eq!(result_text(&payload_result(json!(42))), "42");
    }

    #[test]
    fn test_error_result_http_status() {
        let err = BackendError::http_status(StatusCode::NOT_FOUND, br#"{"msg":"missing"}"#);
        let result = error_result(&err);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(
            result_text(&result),
            r#"错误: HTTP 404: Not Found - {"msg":"missing"}"#
        );
    }

    #[test]
    fn test_error_result_plain_message() {
        let result = error_result(&BackendError::MissingEndpoint);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "错误: ENDPOINT environment variable is not set"
        );
    }

    #[test]
    fn test_parse_arguments_none_as_empty() {
        let params: Result<NoParams, _> = parse_arguments(None);
        assert!(params.is_ok());
    }

    #[test]
    fn test_parse_arguments_missing_required_field() {
        let params: Result<QuestionParams, _> = parse_arguments(Some(JsonObject::new()));
        let err = params.unwrap_err();
        assert!(err.message.contains("input"));
    }

    #[test]
    fn test_no_params_schema_has_empty_properties() {
        let schema = no_params_schema();
        assert_eq!(
            Value::Object(schema.as_ref().clone()),
            json!({"type": "object", "properties": {}})
        );
    }

    #[test]
    fn test_question_body() {
        let params = QuestionParams {
            input: "用户".to_string(),
        };
        assert_eq!(params.to_body(), json!({"question": "用户"}));
    }

    #[test]
    fn test_question_schema_requires_input() {
        let schema = rmcp::handler::server::tool::cached_schema_for_type::<QuestionParams>();
        let required = schema.get("required").and_then(|r| r.as_array()).unwrap();
        assert!(required.iter().any(|v| v == "input"));
    }
}
