//! Phone-mockup slot for one ad variation
//!
//! Exactly three of these render regardless of how many creatives came
//! back. The loading overlay is request-level, so it applies uniformly to
//! all slots.

use dioxus::prelude::*;

use adforge_shared::AdVariationSlot;

use crate::presentation::markdown::render_markdown;

/// Props for AdSlotCard
#[derive(Props, Clone, PartialEq)]
pub struct AdSlotCardProps {
    /// Slot contents; placeholder state when empty
    pub slot: AdVariationSlot,
    /// Whether a generation request is in flight
    pub is_loading: bool,
}

/// One phone-mockup ad slot
///
/// While a request is in flight, a loading overlay covers the slot. With no
/// content, an empty-state prompt shows. With content: a recognized image
/// data-URI renders as an image, any other payload renders verbatim as a
/// diagnostic, and the ad text renders through the markdown pipeline.
#[component]
pub fn AdSlotCard(props: AdSlotCardProps) -> Element {
    let slot = &props.slot;

    rsx! {
        div {
            class: "phone-frame",

            if props.is_loading {
                div {
                    class: "phone-overlay",
                    div { class: "spinner" }
                }
            }

            if !props.is_loading && slot.is_placeholder() {
                p {
                    class: "phone-empty-prompt",
                    "Fill in the form on the left to generate an ad!"
                }
            }

            if !props.is_loading && !slot.is_placeholder() {
                div {
                    class: "phone-content",

                    if let Some(image) = slot.renderable_image() {
                        img {
                            class: "phone-image",
                            alt: "Generated Ad Image",
                            src: "{image}",
                        }
                    } else if let Some(ref raw) = slot.image_data {
                        p {
                            class: "phone-image-error",
                            "Could not display image. Received: {raw}"
                        }
                    }

                    if let Some(ref text) = slot.text {
                        div {
                            class: "phone-text",
                            dangerous_inner_html: render_markdown(text),
                        }
                    }
                }
            }
        }
    }
}
