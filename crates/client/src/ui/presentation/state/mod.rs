//! Signal-based UI state

mod ad_state;

pub use ad_state::AdState;

use dioxus::prelude::*;

/// Hook to access the AdState from Dioxus context
pub fn use_ad_state() -> AdState {
    use_context::<AdState>()
}
