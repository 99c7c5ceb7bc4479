//! Ad Service - Application service for creative generation
//!
//! Issues exactly one generation call per submission, requesting the fixed
//! three variations. A successful response with no creatives is a failure of
//! its own kind, distinct from transport errors. Callers never retry
//! automatically.

use std::sync::Arc;

use adforge_shared::{AdCreative, AdGenerationRequest, AdGenerationResponse, VARIATION_COUNT};

use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

/// Ad generation service
#[derive(Clone)]
pub struct AdService {
    api: Arc<dyn RawApiPort>,
}

impl AdService {
    /// Create a new AdService with the given API port
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Request ad creatives for the given product and persona.
    ///
    /// Returns the backend's creative list as-is; the display layer
    /// normalizes it to the fixed slot count.
    pub async fn generate(
        &self,
        product: &str,
        product_description: &str,
        persona_description: &str,
    ) -> Result<Vec<AdCreative>, ServiceError> {
        let request = AdGenerationRequest {
            product: product.to_string(),
            product_description: product_description.to_string(),
            persona_description: persona_description.to_string(),
            number_of_variations: VARIATION_COUNT as u8,
        };
        let body =
            serde_json::to_value(&request).map_err(|e| ServiceError::Parse(e.to_string()))?;

        tracing::debug!(product = %request.product, "requesting ad creatives");
        let value = self.api.post_json("/generate_ad_content", &body).await?;
        let response: AdGenerationResponse =
            serde_json::from_value(value).map_err(|e| ServiceError::Parse(e.to_string()))?;

        if response.creatives.is_empty() {
            tracing::warn!("generation succeeded but returned no creatives");
            return Err(ServiceError::NoCreatives);
        }
        Ok(response.creatives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ApiError;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct RecordingApi {
        response: Result<Value, ApiError>,
        posts: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingApi {
        fn returning(response: Result<Value, ApiError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                posts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for RecordingApi {
        async fn get_json(&self, _path: &str) -> Result<Value, ApiError> {
            panic!("ad service never issues GETs")
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            if let Ok(mut posts) = self.posts.lock() {
                posts.push((path.to_string(), body.clone()));
            }
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn generate_posts_the_wire_payload_once() {
        let api = RecordingApi::returning(Ok(json!({
            "creatives": [
                {"ad_text": "Fly.", "ad_image_data": "data:image/png;base64,AAA"}
            ]
        })));
        let svc = AdService::new(api.clone());

        let creatives = svc
            .generate("SneakBoost", "lightweight running shoe", "urban teens")
            .await
            .expect("creatives");

        assert_eq!(creatives.len(), 1);
        let posts = api.posts.lock().expect("posts");
        assert_eq!(posts.len(), 1);
        let (path, body) = &posts[0];
        assert_eq!(path, "/generate_ad_content");
        assert_eq!(body["product"], "SneakBoost");
        assert_eq!(body["product_description"], "lightweight running shoe");
        assert_eq!(body["persona_description"], "urban teens");
        assert_eq!(body["number_of_variations"], 3);
    }

    #[tokio::test]
    async fn empty_creative_list_is_a_distinct_failure() {
        let api = RecordingApi::returning(Ok(json!({ "creatives": [] })));
        let svc = AdService::new(api);

        let err = svc
            .generate("SneakBoost", "shoe", "teens")
            .await
            .expect_err("should fail");
        assert!(matches!(err, ServiceError::NoCreatives));
    }

    #[tokio::test]
    async fn missing_creative_list_is_the_same_failure() {
        let api = RecordingApi::returning(Ok(json!({})));
        let svc = AdService::new(api);

        let err = svc
            .generate("SneakBoost", "shoe", "teens")
            .await
            .expect_err("should fail");
        assert!(matches!(err, ServiceError::NoCreatives));
    }

    #[tokio::test]
    async fn server_detail_message_survives_verbatim() {
        let api = RecordingApi::returning(Err(ApiError::Server {
            status: 429,
            message: "quota exceeded".to_string(),
        }));
        let svc = AdService::new(api);

        let err = svc
            .generate("SneakBoost", "shoe", "teens")
            .await
            .expect_err("should fail");
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[tokio::test]
    async fn more_than_three_creatives_pass_through_untrimmed() {
        let creatives: Vec<Value> = (0..5)
            .map(|n| json!({"ad_text": format!("ad {n}"), "ad_image_data": ""}))
            .collect();
        let api = RecordingApi::returning(Ok(json!({ "creatives": creatives })));
        let svc = AdService::new(api);

        let creatives = svc
            .generate("SneakBoost", "shoe", "teens")
            .await
            .expect("creatives");
        // Truncation to the slot count happens in display normalization.
        assert_eq!(creatives.len(), 5);
    }
}
