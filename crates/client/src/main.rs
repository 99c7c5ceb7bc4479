//! AdForge client - unified composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adforge_client::ports::outbound::{PlatformPort, RawApiPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adforge_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting AdForge client");

    // Platform
    let platform = adforge_client::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // API base URL
    // The browser build talks to the origin that served the page; native
    // builds default to a local backend and can be pointed elsewhere.
    let base_url = {
        #[cfg(target_arch = "wasm32")]
        {
            "/api/v1".to_string()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("ADFORGE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string())
        }
    };

    // HTTP
    let api: std::sync::Arc<dyn RawApiPort> =
        std::sync::Arc::new(adforge_client::infrastructure::ApiAdapter::new(base_url));

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_client_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(adforge_client::presentation::Services::new(api))
        .launch(adforge_client::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_client_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
