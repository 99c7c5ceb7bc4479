//! Global error toast
//!
//! Shows the single current error as a dismissible overlay anchored to the
//! bottom of the screen. The value is set on failure and cleared on
//! dismissal or at the start of the next attempt.

use dioxus::prelude::*;

use crate::presentation::state::use_ad_state;

/// Dismissible error notification
#[component]
pub fn ErrorToast() -> Element {
    let ad_state = use_ad_state();

    let message = ad_state.error().read().clone();

    rsx! {
        if let Some(ref message) = message {
            div {
                class: "error-toast",
                span { class: "error-toast-message", "{message}" }
                button {
                    class: "error-toast-dismiss",
                    onclick: move |_| {
                        let mut state = ad_state.clone();
                        state.clear_error();
                    },
                    "×"
                }
            }
        }
    }
}
