//! Platform Port - host-environment integration
//!
//! The UI runs in a browser tab or a native webview; this port covers the
//! small surface where the two differ.

pub trait PlatformPort: Send + Sync {
    /// Set the browser page title (no-op on desktop).
    fn set_page_title(&self, title: &str);
}
