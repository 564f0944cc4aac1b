//! HTTP client for the backend API.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::config::{BackendConfig, BackendConfigProvider, EnvConfigProvider};
use super::error::{BackendError, BackendResult};

/// HTTP methods the backend API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMethod {
    Get,
    Post,
}

impl BackendMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for BackendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BackendMethod> for reqwest::Method {
    fn from(method: BackendMethod) -> Self {
        match method {
            BackendMethod::Get => reqwest::Method::GET,
            BackendMethod::Post => reqwest::Method::POST,
        }
    }
}

/// A single request against the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    /// Path appended to the endpoint, e.g. `/entities/simple`.
    pub path: &'static str,

    pub method: BackendMethod,

    /// JSON body, only sent with `POST`.
    pub body: Option<Value>,
}

impl BackendRequest {
    /// A `GET` request without body.
    pub fn get(path: &'static str) -> Self {
        Self {
            path,
            method: BackendMethod::Get,
            body: None,
        }
    }

    /// A `POST` request carrying a JSON body.
    pub fn post(path: &'static str, body: Value) -> Self {
        Self {
            path,
            method: BackendMethod::Post,
            body: Some(body),
        }
    }
}

/// Client forwarding tool calls to the backend.
///
/// Settings are fetched from the provider for every request, so changes to
/// the environment are picked up without a restart. Each call is a single
/// attempt: no retries, no timeout beyond the HTTP client's defaults.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: Arc<dyn BackendConfigProvider>,
}

impl BackendClient {
    /// Create a client drawing its settings from the given provider.
    pub fn new(config: Arc<dyn BackendConfigProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client that reads `ENDPOINT`/`API_KEY` on every request.
    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvConfigProvider))
    }

    /// Create a client bound to a fixed configuration.
    pub fn with_config(config: BackendConfig) -> Self {
        Self::new(Arc::new(config))
    }

    /// Issue `request` and return the `data` field of the response envelope.
    ///
    /// A response without a `data` field yields `Value::Null`.
    pub async fn forward(&self, request: &BackendRequest) -> BackendResult<Value> {
        let config = self.config.backend_config();
        let endpoint = config.endpoint()?;

        let url = format!("{}{}", endpoint, request.path);
        let url = reqwest::Url::parse(&url).map_err(|e| BackendError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        info!("Request: {} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(api_key) = config.api_key.as_deref() {
            builder = builder.bearer_auth(api_key);
        }

        if let (BackendMethod::Post, Some(body)) = (request.method, request.body.as_ref()) {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(status = status.as_u16(), len = bytes.len(), "Backend responded");

        if !status.is_success() {
            return Err(BackendError::http_status(status, &bytes));
        }

        let envelope: Value =
            serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))?;

        Ok(extract_payload(envelope))
    }
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient").finish_non_exhaustive()
    }
}

fn extract_payload(envelope: Value) -> Value {
    match envelope {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
