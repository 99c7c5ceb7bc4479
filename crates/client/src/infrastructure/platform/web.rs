//! Browser platform implementation

use crate::ports::outbound::PlatformPort;

/// Browser platform adapter backed by `web_sys`.
#[derive(Clone, Default)]
pub struct WebPlatform;

impl PlatformPort for WebPlatform {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create the platform adapter for wasm32 targets.
pub fn create_platform() -> WebPlatform {
    WebPlatform
}
