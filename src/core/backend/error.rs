//! Backend request error types.

use thiserror::Error;

use super::config::ENDPOINT_VAR;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur while forwarding a request to the backend.
///
/// The `Display` output of each variant is the text shown to MCP clients, so
/// it stays free of Debug formatting.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No backend endpoint is configured.
    #[error("{} environment variable is not set", ENDPOINT_VAR)]
    MissingEndpoint,

    /// Endpoint and path do not form a valid URL.
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, DNS or transport failure.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}{}{}", text_suffix(.status_text), body_suffix(.body))]
    HttpStatus {
        status: u16,
        status_text: String,
        /// Response body, serialized as JSON.
        body: Option<String>,
    },

    /// A success response whose body is not JSON.
    #[error("Invalid JSON in backend response: {0}")]
    Decode(String),
}

fn text_suffix(status_text: &str) -> String {
    if status_text.is_empty() {
        String::new()
    } else {
        format!(": {}", status_text)
    }
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_ref()
        .map(|b| format!(" - {}", b))
        .unwrap_or_default()
}

impl BackendError {
    /// Build an HTTP status error from a response status and its raw body.
    ///
    /// A JSON body is re-serialized compactly, any other body is rendered as a
    /// JSON string, and an empty body is dropped.
    pub fn http_status(status: reqwest::StatusCode, body: &[u8]) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: serialize_body(body),
        }
    }

    /// The HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn serialize_body(body: &[u8]) -> Option<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    let value = serde_json::from_slice::<serde_json::Value>(body)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(body).into_owned()));

    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_missing_endpoint_message() {
        assert_eq!(
            BackendError::MissingEndpoint.to_string(),
            "ENDPOINT environment variable is not set"
        );
    }

    #[test]
    fn test_http_status_with_json_body() {
        let err = BackendError::http_status(
            StatusCode::NOT_FOUND,
            br#"{ "message": "no such entity" }"#,
        );
        assert_eq!(
            err.to_string(),
            r#"HTTP 404: Not Found - {"message":"no such entity"}"#
        );
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_http_status_with_text_body() {
        let err = BackendError::http_status(StatusCode::BAD_GATEWAY, b"upstream down");
        assert_eq!(err.to_string(), r#"HTTP 502: Bad Gateway - "upstream down""#);
    }

    #[test]
    fn test_http_status_with_empty_body() {
        let err = BackendError::http_status(StatusCode::INTERNAL_SERVER_ERROR, b"  \n");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_http_status_without_reason_phrase() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = BackendError::http_status(status, b"");
        assert_eq!(err.to_string(), "HTTP 599");

        let err = BackendError::http_status(status, br#"{"retry":true}"#);
        assert_eq!(err.to_string(), r#"HTTP 599 - {"retry":true}"#);
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        assert_eq!(BackendError::MissingEndpoint.status(), None);
        assert_eq!(BackendError::Decode("eof".to_string()).status(), None);
    }
}
