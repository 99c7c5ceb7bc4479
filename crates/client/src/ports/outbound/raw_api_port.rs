//! Raw API Port - Object-safe HTTP boundary
//!
//! Application services store the HTTP boundary behind `Arc<dyn ...>`, so
//! the trait works in `serde_json::Value` rather than being generic over
//! request/response types. Typed mapping happens in the services.

use serde_json::Value;

/// Errors surfaced by HTTP adapters.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    ///
    /// `message` carries the server-provided `detail` when the error body
    /// has one, a generic fallback otherwise.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
