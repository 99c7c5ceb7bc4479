//! AdForge Shared - wire types for the ad generation API
//!
//! This crate contains the types shared across the client layers:
//! - Wire-format DTOs for the two REST endpoints
//! - The normalized persona catalog
//! - Display-slot normalization for the three-variation layout
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and transforms
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod persona;
pub mod requests;
pub mod responses;
pub mod slots;

pub use persona::{PersonaCatalog, PersonaProfile, PersonaSegments};
pub use requests::AdGenerationRequest;
pub use responses::{AdCreative, AdGenerationResponse};
pub use slots::{display_slots, AdVariationSlot, VARIATION_COUNT};
