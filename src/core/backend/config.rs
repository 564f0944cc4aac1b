//! Backend connection settings.

use serde::{Deserialize, Serialize};

use super::error::{BackendError, BackendResult};

/// Environment variable holding the backend base URL.
pub const ENDPOINT_VAR: &str = "ENDPOINT";

/// Environment variable holding the optional bearer credential.
pub const API_KEY_VAR: &str = "API_KEY";

/// Connection settings for the backend API.
///
/// `endpoint` is the base URL that request paths are appended to verbatim.
/// `api_key`, when present, is sent as a bearer token on every request.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g. `https://api.example.com`).
    pub endpoint: Option<String>,

    /// Bearer credential attached to every backend request.
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl BackendConfig {
    /// Create a configuration pointing at the given endpoint, without credential.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            api_key: None,
        }
    }

    /// Attach a bearer credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Read `ENDPOINT` and `API_KEY` from the process environment.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_env() -> Self {
        Self {
            endpoint: non_empty_var(ENDPOINT_VAR),
            api_key: non_empty_var(API_KEY_VAR),
        }
    }

    /// The configured endpoint, or `MissingEndpoint` when there is none.
    pub fn endpoint(&self) -> BackendResult<&str> {
        self.endpoint
            .as_deref()
            .ok_or(BackendError::MissingEndpoint)
    }

    /// Whether a bearer credential will be attached.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Source of backend settings, consulted once per forwarded request.
pub trait BackendConfigProvider: Send + Sync {
    /// Produce the settings for the request about to be issued.
    fn backend_config(&self) -> BackendConfig;
}

/// Provider that re-reads the process environment on every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigProvider;

impl BackendConfigProvider for EnvConfigProvider {
    fn backend_config(&self) -> BackendConfig {
        BackendConfig::from_env()
    }
}

/// A fixed snapshot always yields itself.
impl BackendConfigProvider for BackendConfig {
    fn backend_config(&self) -> BackendConfig {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ENV_TEST_LOCK;

    fn clear_env() {
        unsafe {
            std::env::remove_var(ENDPOINT_VAR);
            std::env::remove_var(API_KEY_VAR);
        }
    }

    #[test]
    fn test_from_env_reads_both_values() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var(ENDPOINT_VAR, "https://api.example.com");
            std::env::set_var(API_KEY_VAR, "secret-key");
        }
        let config = BackendConfig::from_env();
        assert_eq!(config.endpoint().unwrap(), "https://api.example.com");
        assert_eq!(config.api_key.as_deref(), Some("secret-key"));
        clear_env();
    }

    #[test]
    fn test_from_env_treats_empty_as_unset() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var(ENDPOINT_VAR, "");
            std::env::set_var(API_KEY_VAR, "");
        }
        let config = BackendConfig::from_env();
        assert!(matches!(config.endpoint(), Err(BackendError::MissingEndpoint)));
        assert!(!config.has_api_key());
        clear_env();
    }

    #[test]
    fn test_env_provider_rereads_per_call() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let provider = EnvConfigProvider;
        assert!(provider.backend_config().endpoint.is_none());

        unsafe {
            std::env::set_var(ENDPOINT_VAR, "http://localhost:9000");
        }
        assert_eq!(
            provider.backend_config().endpoint.as_deref(),
            Some("http://localhost:9000")
        );
        clear_env();
    }

    #[test]
    fn test_snapshot_provider_returns_itself() {
        let config = BackendConfig::new("http://backend").with_api_key("k");
        assert_eq!(config.backend_config(), config);
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let config = BackendConfig::new("http://backend").with_api_key("super_secret_key");
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(debug_str.contains("http://backend"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
