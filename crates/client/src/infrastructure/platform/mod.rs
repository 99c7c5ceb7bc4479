//! Platform-specific implementations
//!
//! The correct platform adapter is selected at compile time based on the
//! target architecture.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use web::create_platform;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::create_platform;
