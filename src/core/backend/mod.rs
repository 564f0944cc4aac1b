//! Backend request forwarding.
//!
//! Every tool call ends in exactly one HTTP request against the configured
//! backend. This module owns that request: resolving the endpoint and
//! credential, issuing the call, and unwrapping the `data` envelope the
//! backend wraps its results in.
//!
//! - `config.rs` - endpoint/API key settings and the providers that supply them
//! - `client.rs` - the HTTP client issuing one request per call
//! - `error.rs` - failures a forwarded request can produce

mod client;
mod config;
mod error;

pub use client::{BackendClient, BackendMethod, BackendRequest};
pub use config::{API_KEY_VAR, BackendConfig, BackendConfigProvider, ENDPOINT_VAR, EnvConfigProvider};
pub use error::{BackendError, BackendResult};
