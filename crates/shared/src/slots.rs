//! Fixed-slot display normalization
//!
//! The result layout always renders exactly three phone mockups, however
//! many creatives the backend returned. `display_slots` is the pure
//! normalization step, decoupled from rendering: pad with empty slots below
//! three, truncate above.

use crate::responses::AdCreative;

/// Number of ad variations requested from the backend and rendered.
pub const VARIATION_COUNT: usize = 3;

/// Prefix that marks an image payload as renderable.
const DATA_URI_PREFIX: &str = "data:image";

/// Contents of one display slot. Unset fields render the placeholder state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdVariationSlot {
    pub text: Option<String>,
    pub image_data: Option<String>,
}

impl AdVariationSlot {
    /// True when the slot has neither text nor image payload.
    pub fn is_placeholder(&self) -> bool {
        self.text.is_none() && self.image_data.is_none()
    }

    /// The image payload, if it is a recognized image data-URI.
    ///
    /// A payload that is present but not recognized is not an error; the
    /// caller shows it verbatim as a diagnostic instead of an image.
    pub fn renderable_image(&self) -> Option<&str> {
        self.image_data
            .as_deref()
            .filter(|data| data.starts_with(DATA_URI_PREFIX))
    }
}

impl From<AdCreative> for AdVariationSlot {
    fn from(creative: AdCreative) -> Self {
        // Blank wire strings collapse to unset so the slot renders the
        // placeholder state rather than an empty card.
        Self {
            text: Some(creative.ad_text).filter(|t| !t.is_empty()),
            image_data: Some(creative.ad_image_data).filter(|d| !d.is_empty()),
        }
    }
}

/// Normalize a creative list to exactly [`VARIATION_COUNT`] display slots.
pub fn display_slots(creatives: Vec<AdCreative>) -> [AdVariationSlot; VARIATION_COUNT] {
    let mut slots: [AdVariationSlot; VARIATION_COUNT] = Default::default();
    for (slot, creative) in slots.iter_mut().zip(creatives) {
        *slot = creative.into();
    }
    slots
}
