//! Selector UI built on [egui](https://docs.rs/egui).
//!
//! - [`show_selector`] — one labeled row for a scalar polymorphic field: a
//!   dropdown over the registered candidate types, with the held value's own
//!   fields editable below it.
//! - [`show_selector_list`] — the same per element of a sequence field.
//! - [`SelectorState`] — per-field renderer state, created by the call site
//!   and passed `&mut` into every draw of the same field.
//!
//! # Usage
//!
//! ```ignore
//! use poly_select::{SelectorMarker, SelectorState, show_selector};
//!
//! // During setup — one state per field, living as long as the panel:
//! let marker = SelectorMarker::default();
//! let mut state = SelectorState::new();
//!
//! // During frame, render into any egui::Ui container:
//! show_selector(ui, "brain", &marker, &registry, &mut state, &mut slot);
//! ```

mod selector;

pub use selector::{show_selector, show_selector_list};

use std::any::TypeId;

use crate::PolyField;
use crate::error::SelectorError;
use crate::marker::SelectorMarker;
use crate::registry::{TypeRegistry, value_key};

/// Per-field state for a selector dropdown.
///
/// Starts uninitialized; the first draw enumerates candidates from the
/// registry and locates the field's current value among them. Enumeration
/// happens exactly once per state lifetime, so registrations made after the
/// first draw are only seen by fresh states. Discard the state together with
/// the panel that owns the field.
///
/// Invariant: the candidate, display-name, and key sequences are parallel and
/// equal in length; `current` is `None` (nothing highlighted) or a valid
/// index into all three. Index 0 is always the synthetic "no value" entry.
pub struct SelectorState {
    /// Selected candidate index; `None` when the stored value matches no
    /// enumerated candidate.
    current: Option<usize>,
    /// Nullable type handles, entry 0 is the synthetic null candidate.
    candidates: Vec<Option<TypeId>>,
    /// Labels shown in the dropdown, parallel to `candidates`.
    display_names: Vec<&'static str>,
    /// Identity keys, parallel to `candidates`.
    type_keys: Vec<String>,
    /// Set on first draw, never cleared.
    initialized: bool,
}

impl SelectorState {
    pub fn new() -> Self {
        Self {
            current: None,
            candidates: Vec::new(),
            display_names: Vec::new(),
            type_keys: Vec::new(),
            initialized: false,
        }
    }

    /// Whether the first draw has enumerated candidates yet.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The highlighted candidate index, `None` if nothing is highlighted.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Number of enumerated candidates (zero before the first draw).
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Enumerated type handles; entry 0 is the synthetic null candidate.
    pub fn candidates(&self) -> &[Option<TypeId>] {
        &self.candidates
    }

    /// Dropdown labels, parallel to [`candidates`](SelectorState::candidates).
    pub fn display_names(&self) -> &[&'static str] {
        &self.display_names
    }

    /// Identity keys, parallel to [`candidates`](SelectorState::candidates).
    pub fn type_keys(&self) -> &[String] {
        &self.type_keys
    }

    /// Performs the one-time first-draw setup: snapshots the candidate list
    /// from the registry and highlights the entry matching the slot's
    /// current runtime type.
    ///
    /// An empty slot matches the synthetic null entry (index 0). A stored
    /// value whose identity key is absent from the snapshot leaves nothing
    /// highlighted; that is a normal state, not an error.
    pub fn ensure_initialized<B: PolyField + ?Sized>(
        &mut self,
        registry: &TypeRegistry<B>,
        marker: &SelectorMarker,
        slot: &Option<Box<B>>,
    ) {
        if self.initialized {
            return;
        }

        let c = registry.candidates(marker.include_widgets());
        self.candidates = c.handles;
        self.display_names = c.display_names;
        self.type_keys = c.type_keys;

        let key = slot.as_deref().map(value_key).unwrap_or_default();
        self.current = self.type_keys.iter().position(|k| *k == key);
        self.initialized = true;
    }

    /// Applies a dropdown selection to the slot.
    ///
    /// A no-op when `index` already equals the current index, so unrelated
    /// redraws never reconstruct the value. Otherwise the current index is
    /// updated and the slot is replaced: cleared for the synthetic entry,
    /// or assigned a fresh default instance of the chosen candidate,
    /// discarding whatever the slot held before.
    ///
    /// Returns `Ok(true)` if the slot was modified.
    ///
    /// # Errors
    ///
    /// Fails if the registry can no longer construct the chosen candidate
    /// (possible only when the registry changed after this state's snapshot
    /// was taken). The slot is left unchanged in that case.
    pub fn apply_selection<B: PolyField + ?Sized>(
        &mut self,
        index: usize,
        registry: &TypeRegistry<B>,
        slot: &mut Option<Box<B>>,
    ) -> Result<bool, SelectorError> {
        debug_assert!(index < self.candidates.len());
        if self.current == Some(index) {
            return Ok(false);
        }
        self.current = Some(index);

        *slot = if index == 0 {
            None
        } else {
            Some(registry.create(&self.type_keys[index])?)
        };
        Ok(true)
    }
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{NULL_DISPLAY_NAME, type_key};

    trait Shape: PolyField {
        fn area(&self) -> f32;
    }

    #[derive(Default)]
    struct Circle {
        radius: f32,
    }

    #[derive(Default)]
    struct Square {
        side: f32,
    }

    /// Not registered with the registry at all.
    struct Blob;

    impl PolyField for Circle {
        fn type_name(&self) -> &'static str {
            std::any::type_name::<Self>()
        }

        fn inspect_ui(&mut self, ui: &mut egui::Ui) {
            ui.add(egui::DragValue::new(&mut self.radius).speed(0.01));
        }
    }

    impl Shape for Circle {
        fn area(&self) -> f32 {
            std::f32::consts::PI * self.radius * self.radius
        }
    }

    impl PolyField for Square {
        fn type_name(&self) -> &'static str {
            std::any::type_name::<Self>()
        }

        fn inspect_ui(&mut self, ui: &mut egui::Ui) {
            ui.add(egui::DragValue::new(&mut self.side).speed(0.01));
        }
    }

    impl Shape for Square {
        fn area(&self) -> f32 {
            self.side * self.side
        }
    }

    impl PolyField for Blob {
        fn type_name(&self) -> &'static str {
            std::any::type_name::<Self>()
        }

        fn inspect_ui(&mut self, _ui: &mut egui::Ui) {}
    }

    impl Shape for Blob {
        fn area(&self) -> f32 {
            0.0
        }
    }

    fn shape_registry() -> TypeRegistry<dyn Shape> {
        let mut r = TypeRegistry::<dyn Shape>::new();
        r.register::<Circle>(|| Box::new(Circle::default()));
        r.register::<Square>(|| Box::new(Square::default()));
        r
    }

    fn index_of<T: 'static>(state: &SelectorState) -> usize {
        let key = type_key::<T>();
        state.type_keys().iter().position(|k| *k == key).unwrap()
    }

    #[test]
    fn empty_slot_highlights_null_entry() {
        let registry = shape_registry();
        let slot: Option<Box<dyn Shape>> = None;
        let mut state = SelectorState::new();
        assert!(!state.is_initialized());

        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);
        assert!(state.is_initialized());
        assert_eq!(state.current_index(), Some(0));
        assert_eq!(state.display_names()[0], NULL_DISPLAY_NAME);
        assert_eq!(state.candidate_count(), 3); // null + Circle + Square
    }

    #[test]
    fn stored_value_highlights_its_candidate() {
        let registry = shape_registry();
        let slot: Option<Box<dyn Shape>> = Some(Box::new(Square { side: 2.0 }));
        let mut state = SelectorState::new();

        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);
        assert_eq!(state.current_index(), Some(index_of::<Square>(&state)));
    }

    #[test]
    fn unregistered_value_highlights_nothing() {
        let registry = shape_registry();
        let slot: Option<Box<dyn Shape>> = Some(Box::new(Blob));
        let mut state = SelectorState::new();

        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn enumeration_happens_once() {
        let mut registry = shape_registry();
        let slot: Option<Box<dyn Shape>> = None;
        let mut state = SelectorState::new();
        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);
        let count = state.candidate_count();

        // Later registrations are only seen by fresh states.
        registry.register::<Blob>(|| Box::new(Blob));
        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);
        assert_eq!(state.candidate_count(), count);

        let mut fresh = SelectorState::new();
        fresh.ensure_initialized(&registry, &SelectorMarker::default(), &slot);
        assert_eq!(fresh.candidate_count(), count + 1);
    }

    #[test]
    fn selecting_candidate_replaces_value() {
        let registry = shape_registry();
        let mut slot: Option<Box<dyn Shape>> = Some(Box::new(Circle { radius: 5.0 }));
        let mut state = SelectorState::new();
        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);

        let square = index_of::<Square>(&state);
        let changed = state.apply_selection(square, &registry, &mut slot).unwrap();
        assert!(changed);
        assert_eq!(state.current_index(), Some(square));

        // A fresh default Square, prior Circle edits discarded.
        let value = slot.as_ref().unwrap();
        assert_eq!(value_key(&**value), type_key::<Square>());
        assert_eq!(value.area(), 0.0);
    }

    #[test]
    fn selecting_null_clears_value() {
        let registry = shape_registry();
        let mut slot: Option<Box<dyn Shape>> = Some(Box::new(Circle { radius: 1.0 }));
        let mut state = SelectorState::new();
        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);

        let changed = state.apply_selection(0, &registry, &mut slot).unwrap();
        assert!(changed);
        assert!(slot.is_none());
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn reapplying_current_selection_is_a_no_op() {
        let registry = shape_registry();
        let mut slot: Option<Box<dyn Shape>> = Some(Box::new(Circle { radius: 7.0 }));
        let mut state = SelectorState::new();
        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);

        let circle = index_of::<Circle>(&state);
        let changed = state.apply_selection(circle, &registry, &mut slot).unwrap();
        assert!(!changed);

        // The stored instance was not reconstructed: edits survive.
        assert_eq!(slot.as_ref().unwrap().area(), std::f32::consts::PI * 49.0);
    }

    #[test]
    fn stale_snapshot_construction_failure_leaves_slot() {
        // Snapshot taken from a registry that can construct Circle...
        let registry = shape_registry();
        let mut slot: Option<Box<dyn Shape>> = None;
        let mut state = SelectorState::new();
        state.ensure_initialized(&registry, &SelectorMarker::default(), &slot);
        let circle = index_of::<Circle>(&state);

        // ...applied against one that no longer can.
        let empty = TypeRegistry::<dyn Shape>::new();
        let err = state.apply_selection(circle, &empty, &mut slot).unwrap_err();
        assert!(matches!(err, SelectorError::UnknownType { .. }));
        assert!(slot.is_none());
    }
}
