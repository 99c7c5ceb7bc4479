//! HTTP adapter for the generation backend
//!
//! Implements `RawApiPort` over `reqwest` on native targets and `gloo-net`
//! in the browser. Paths are joined onto the configured API base. Non-2xx
//! responses surface the server's `detail` message when the error body
//! carries one; requests are never retried here.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Fallback when an error response carries no usable `detail`.
const GENERIC_SERVER_ERROR: &str = "The server reported an error. Please try again later.";

/// HTTP adapter over the configured API base (e.g. `/api/v1`).
pub struct ApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Extract the user-facing message from an error response body.
///
/// The backend puts a human-readable `detail` field in error bodies; absent
/// that (or on an unparseable body) the generic fallback is used.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(response).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn into_json(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status: status.as_u16(),
            message: error_detail(&body),
        });
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(response).await
    }
}

#[cfg(target_arch = "wasm32")]
async fn into_json(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status: response.status(),
            message: error_detail(&body),
        });
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod error_detail_tests {
        use super::*;

        #[test]
        fn detail_field_is_surfaced_verbatim() {
            assert_eq!(
                error_detail(r#"{"detail": "quota exceeded"}"#),
                "quota exceeded"
            );
        }

        #[test]
        fn empty_body_falls_back_to_generic_message() {
            assert_eq!(error_detail(""), GENERIC_SERVER_ERROR);
        }

        #[test]
        fn body_without_detail_falls_back_to_generic_message() {
            assert_eq!(error_detail(r#"{"error": "nope"}"#), GENERIC_SERVER_ERROR);
        }

        #[test]
        fn non_string_detail_falls_back_to_generic_message() {
            assert_eq!(error_detail(r#"{"detail": 42}"#), GENERIC_SERVER_ERROR);
        }
    }

    #[test]
    fn url_joins_base_and_path() {
        let adapter = ApiAdapter::new("http://localhost:8000/api/v1/");
        assert_eq!(
            adapter.url("/persona-segments"),
            "http://localhost:8000/api/v1/persona-segments"
        );
    }

    #[test]
    fn relative_base_is_kept_as_is() {
        let adapter = ApiAdapter::new("/api/v1");
        assert_eq!(
            adapter.url("/generate_ad_content"),
            "/api/v1/generate_ad_content"
        );
    }
}
