//! Service providers for the presentation layer
//!
//! Dioxus context providers for application services. Components use
//! `use_context` to access services without depending on infrastructure
//! implementations.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::services::{AdService, PersonaService};
use crate::ports::outbound::RawApiPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub persona: Arc<PersonaService>,
    pub ads: Arc<AdService>,
}

impl Services {
    /// Create all services with the given API port
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self {
            persona: Arc::new(PersonaService::new(api.clone())),
            ads: Arc::new(AdService::new(api)),
        }
    }
}

/// Hook to access the PersonaService from context
pub fn use_persona_service() -> Arc<PersonaService> {
    let services = use_context::<Services>();
    services.persona.clone()
}

/// Hook to access the AdService from context
pub fn use_ad_service() -> Arc<AdService> {
    let services = use_context::<Services>();
    services.ads.clone()
}
