//! Infrastructure adapters
//!
//! Concrete implementations of the outbound ports. HTTP and platform glue
//! differ between the native webview and the browser; everything else is
//! target-agnostic.

pub mod http_client;
pub mod platform;

pub use http_client::ApiAdapter;
