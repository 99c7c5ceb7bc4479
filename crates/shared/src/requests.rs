//! Request types for the ad generation API

use serde::{Deserialize, Serialize};

/// Body of `POST /generate_ad_content`.
///
/// All string fields are validated non-empty by the form before a request is
/// built; `persona_description` is the resolved description of the selected
/// persona, not its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdGenerationRequest {
    pub product: String,
    pub product_description: String,
    pub persona_description: String,
    pub number_of_variations: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let req = AdGenerationRequest {
            product: "SneakBoost".to_string(),
            product_description: "lightweight running shoe".to_string(),
            persona_description: "urban teens".to_string(),
            number_of_variations: 3,
        };

        let json = serde_json::to_value(&req).expect("serializable");
        assert_eq!(json["product"], "SneakBoost");
        assert_eq!(json["product_description"], "lightweight running shoe");
        assert_eq!(json["persona_description"], "urban teens");
        assert_eq!(json["number_of_variations"], 3);
    }
}
