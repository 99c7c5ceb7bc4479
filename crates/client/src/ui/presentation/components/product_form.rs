//! Product input form (sidebar)
//!
//! Collects the product name, description, and audience persona, validates
//! locally, and hands a valid submission to the generation flow. The
//! persona catalog is fetched once on mount; while it is pending (or after
//! a fetch failure) persona selection stays disabled.

use dioxus::prelude::*;

use adforge_shared::PersonaCatalog;

use crate::presentation::services::{use_ad_service, use_persona_service};
use crate::presentation::state::use_ad_state;

/// Validate the form fields, returning the first user-facing message.
///
/// Rejections happen locally; no network call is made for an invalid form.
fn validation_error(
    persona_selected: bool,
    product: &str,
    description: &str,
) -> Option<&'static str> {
    if !persona_selected {
        return Some("Please select an audience persona.");
    }
    if product.trim().is_empty() {
        return Some("Please enter a product name.");
    }
    if description.trim().is_empty() {
        return Some("Please enter a product description.");
    }
    None
}

/// Sidebar form for describing the product and picking a persona
#[component]
pub fn ProductForm() -> Element {
    let persona_service = use_persona_service();
    let ad_service = use_ad_service();
    let ad_state = use_ad_state();

    // State hooks at component root (all hooks unconditional)
    let mut product = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut selected_persona = use_signal(|| Option::<String>::None);
    let mut form_error = use_signal(|| Option::<String>::None);

    let catalog = use_signal(PersonaCatalog::default);
    let catalog_loading = use_signal(|| true);
    let catalog_error = use_signal(|| Option::<String>::None);

    // Load the persona catalog on mount
    let service_for_load = persona_service.clone();
    use_effect(move || {
        let svc = service_for_load.clone();
        let mut catalog_clone = catalog.clone();
        let mut loading_clone = catalog_loading.clone();
        let mut error_clone = catalog_error.clone();

        spawn(async move {
            match svc.fetch_catalog().await {
                Ok(loaded) => {
                    catalog_clone.set(loaded);
                    loading_clone.set(false);
                }
                Err(e) => {
                    tracing::warn!("persona fetch failed: {e}");
                    error_clone.set(Some(e.to_string()));
                    loading_clone.set(false);
                }
            }
        });
    });

    // Keep the selection valid: default to the first entry once the catalog
    // arrives, reset when the catalog no longer contains the selection.
    use_effect(move || {
        let catalog = catalog.read();
        let still_valid = selected_persona
            .peek()
            .as_deref()
            .map(|id| catalog.contains(id))
            .unwrap_or(false);
        if !still_valid {
            selected_persona.set(catalog.first().map(|p| p.id.clone()));
        }
    });

    let is_generating = *ad_state.is_generating().read();

    let ads_for_submit = ad_service.clone();
    let state_for_submit = ad_state.clone();
    let handle_submit = move |_| {
        form_error.set(None);

        let catalog = catalog.read();
        let selection = selected_persona.read().clone();
        let product_value = product.read().clone();
        let description_value = description.read().clone();

        let persona_selected = selection
            .as_deref()
            .map(|id| catalog.contains(id))
            .unwrap_or(false);
        if let Some(message) =
            validation_error(persona_selected, &product_value, &description_value)
        {
            form_error.set(Some(message.to_string()));
            return;
        }

        let persona_description = selection
            .as_deref()
            .and_then(|id| catalog.description_for(id))
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let ads = ads_for_submit.clone();
        let mut state = state_for_submit.clone();
        state.begin_generation();

        spawn(async move {
            match ads
                .generate(&product_value, &description_value, &persona_description)
                .await
            {
                Ok(creatives) => state.finish(creatives),
                Err(e) => {
                    tracing::warn!("ad generation failed: {e}");
                    state.fail(e.to_string());
                }
            }
        });
    };

    let loading = *catalog_loading.read();
    let fetch_error = catalog_error.read().clone();
    let catalog_read = catalog.read();
    let selection_disabled = loading || fetch_error.is_some() || catalog_read.is_empty();

    rsx! {
        aside {
            class: "sidebar",
            h2 { class: "sidebar-title", "Campaign Brief" }

            if let Some(ref message) = *form_error.read() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "form-field",
                label { class: "form-label", "Audience Persona" }
                select {
                    class: "form-select",
                    disabled: selection_disabled,
                    value: selected_persona.read().clone().unwrap_or_default(),
                    onchange: move |e| selected_persona.set(Some(e.value())),

                    if loading {
                        option { "Loading personas..." }
                    } else if fetch_error.is_some() {
                        option { "Personas unavailable" }
                    } else if catalog_read.is_empty() {
                        option { "No personas available" }
                    } else {
                        for profile in catalog_read.profiles() {
                            option {
                                value: "{profile.id}",
                                selected: selected_persona.read().as_deref() == Some(profile.id.as_str()),
                                "{profile.id}"
                            }
                        }
                    }
                }

                if let Some(ref e) = fetch_error {
                    p { class: "form-error", "{e}" }
                } else if let Some(description) = selected_persona.read().as_deref().and_then(|id| catalog_read.description_for(id)) {
                    p { class: "form-hint", "{description}" }
                }
            }

            div {
                class: "form-field",
                label { class: "form-label", "Product Name" }
                input {
                    r#type: "text",
                    class: "form-input",
                    value: "{product}",
                    oninput: move |e| product.set(e.value()),
                    placeholder: "e.g., SneakBoost",
                }
            }

            div {
                class: "form-field",
                label { class: "form-label", "Product Description" }
                textarea {
                    class: "form-textarea",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                    placeholder: "What makes this product worth talking about?",
                }
            }

            button {
                class: "submit-button",
                disabled: is_generating,
                onclick: handle_submit,
                if is_generating { "Generating..." } else { "Generate Ads" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_persona_is_rejected_first() {
        assert_eq!(
            validation_error(false, "SneakBoost", "lightweight running shoe"),
            Some("Please select an audience persona.")
        );
    }

    #[test]
    fn blank_product_name_is_rejected() {
        assert_eq!(
            validation_error(true, "", "lightweight running shoe"),
            Some("Please enter a product name.")
        );
    }

    #[test]
    fn whitespace_only_product_name_is_rejected() {
        assert_eq!(
            validation_error(true, "   ", "lightweight running shoe"),
            Some("Please enter a product name.")
        );
    }

    #[test]
    fn blank_description_is_rejected() {
        assert_eq!(
            validation_error(true, "SneakBoost", "  \n"),
            Some("Please enter a product description.")
        );
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(
            validation_error(true, "SneakBoost", "lightweight running shoe"),
            None
        );
    }
}
