use std::sync::Arc;

use dioxus::prelude::*;

use crate::ports::outbound::PlatformPort;

pub mod presentation;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::AdState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/output.css"),
        }

        presentation::views::GeneratorView {}
    }
}
