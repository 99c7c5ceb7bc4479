//! Application-level error types

use crate::ports::outbound::ApiError;

/// Errors produced by application services.
///
/// Every variant's `Display` is user-presentable; the UI shows it in the
/// global error toast without further mapping.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    /// The HTTP boundary failed; the message is already user-facing.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The response decoded but did not match the expected shape.
    #[error("Unexpected response from the server: {0}")]
    Parse(String),

    /// The backend reported success but returned no creatives.
    #[error("Failed to generate ad variations: No creatives received.")]
    NoCreatives,
}
