//! Desktop platform implementation

use crate::ports::outbound::PlatformPort;

/// Desktop platform adapter.
#[derive(Clone, Default)]
pub struct DesktopPlatform;

impl PlatformPort for DesktopPlatform {
    fn set_page_title(&self, _title: &str) {
        // No-op on desktop - the window title is managed by Dioxus desktop
    }
}

/// Create the platform adapter for native targets.
pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform
}
