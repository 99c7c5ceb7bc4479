//! Persona Service - Application service for the audience persona catalog
//!
//! One read-only fetch of persona segment data, normalized into the catalog
//! at the wire boundary. The UI fetches once on mount and holds the catalog
//! for the session; there is no refresh and no retry.

use std::sync::Arc;

use adforge_shared::{PersonaCatalog, PersonaSegments};

use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

/// Persona service for loading the selectable audience segments
#[derive(Clone)]
pub struct PersonaService {
    api: Arc<dyn RawApiPort>,
}

impl PersonaService {
    /// Create a new PersonaService with the given API port
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the persona segments and normalize them into a catalog.
    pub async fn fetch_catalog(&self) -> Result<PersonaCatalog, ServiceError> {
        let value = self.api.get_json("/persona-segments").await?;
        let segments: PersonaSegments =
            serde_json::from_value(value).map_err(|e| ServiceError::Parse(e.to_string()))?;
        let catalog = PersonaCatalog::from_segments(&segments);
        tracing::debug!(profiles = catalog.len(), "persona catalog loaded");
        Ok(catalog)
    }
}
