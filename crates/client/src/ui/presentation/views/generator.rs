//! Main generator view
//!
//! Sidebar form on the left, three phone-mockup slots on the right, and the
//! global error toast above everything.

use dioxus::prelude::*;

use crate::presentation::components::{AdSlotCard, ErrorToast, ProductForm};
use crate::presentation::state::use_ad_state;
use crate::use_platform;

/// Single-page generator view
#[component]
pub fn GeneratorView() -> Element {
    let platform = use_platform();
    let ad_state = use_ad_state();

    // Set page title
    use_effect(move || {
        platform.set_page_title("AI Ad Generator");
    });

    let slots = ad_state.slots().read().clone();
    let is_generating = *ad_state.is_generating().read();

    rsx! {
        div {
            class: "generator-layout",
            ProductForm {}
            main {
                class: "generator-main",
                h1 { class: "generator-title", "AI Ad Generator" }
                div {
                    class: "slot-row",
                    for (idx, slot) in slots.into_iter().enumerate() {
                        AdSlotCard {
                            key: "{idx}",
                            slot: slot,
                            is_loading: is_generating,
                        }
                    }
                }
            }
        }
        ErrorToast {}
    }
}
