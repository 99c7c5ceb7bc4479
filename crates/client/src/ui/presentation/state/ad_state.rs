//! Ad generation state using Dioxus signals

use dioxus::prelude::*;

use adforge_shared::{display_slots, AdCreative, AdVariationSlot, VARIATION_COUNT};

/// Global state for the generation flow
///
/// One request is in flight at a time. The error is a single current value
/// with explicit set/clear semantics: set on failure, cleared on dismissal
/// and at the start of each new attempt.
#[derive(Clone)]
pub struct AdState {
    slots: Signal<[AdVariationSlot; VARIATION_COUNT]>,
    is_generating: Signal<bool>,
    error: Signal<Option<String>>,
}

impl AdState {
    /// Create a new AdState with three placeholder slots
    pub fn new() -> Self {
        Self {
            slots: Signal::new(Default::default()),
            is_generating: Signal::new(false),
            error: Signal::new(None),
        }
    }

    pub fn slots(&self) -> Signal<[AdVariationSlot; VARIATION_COUNT]> {
        self.slots.clone()
    }

    pub fn is_generating(&self) -> Signal<bool> {
        self.is_generating.clone()
    }

    pub fn error(&self) -> Signal<Option<String>> {
        self.error.clone()
    }

    /// Start a new attempt: placeholders everywhere, loading on, error
    /// cleared.
    pub fn begin_generation(&mut self) {
        self.slots.set(Default::default());
        self.error.set(None);
        self.is_generating.set(true);
    }

    /// Successful response: show the normalized slots.
    pub fn finish(&mut self, creatives: Vec<AdCreative>) {
        self.slots.set(display_slots(creatives));
        self.is_generating.set(false);
    }

    /// Failed response: all slots revert to placeholders so no stale
    /// content from a previous run survives, and the message is surfaced.
    pub fn fail(&mut self, message: String) {
        self.slots.set(Default::default());
        self.error.set(Some(message));
        self.is_generating.set(false);
    }

    /// Dismiss the current error.
    pub fn clear_error(&mut self) {
        self.error.set(None);
    }
}

impl Default for AdState {
    fn default() -> Self {
        Self::new()
    }
}
