//! Response types for the ad generation API

use serde::{Deserialize, Serialize};

/// One generated ad unit.
///
/// `ad_image_data` is either an image data-URI or an opaque string the
/// backend produced in place of one (surfaced verbatim as a diagnostic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCreative {
    pub ad_text: String,
    pub ad_image_data: String,
}

/// Body of a successful `POST /generate_ad_content` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdGenerationResponse {
    /// A missing list deserializes as empty; callers treat both the same.
    #[serde(default)]
    pub creatives: Vec<AdCreative>,
}
