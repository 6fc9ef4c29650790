//! # poly-select
//!
//! A dropdown widget for [egui](https://docs.rs/egui) inspector panels that
//! lets the user pick which concrete implementation a polymorphic field
//! holds. Selecting an entry default-constructs the chosen type and assigns
//! it into the field's `Option<Box<dyn Trait>>` slot; selecting the synthetic
//! `<null>` entry clears the slot.
//!
//! ## Core Types
//!
//! - [`PolyField`] — Capability trait implemented by every selectable value
//! - [`TypeRegistry`] — Explicit key → factory registry of candidate types
//! - [`SelectorMarker`] — Per-field configuration (widget inclusion flag)
//! - [`SelectorState`] — Per-field renderer state, owned by the call site
//! - [`show_selector`] / [`show_selector_list`] — Draw entry points
//!
//! ## Usage
//!
//! ```ignore
//! use poly_select::{PolyField, SelectorMarker, SelectorState, TypeRegistry, show_selector};
//!
//! trait Brain: PolyField {
//!     fn think(&mut self);
//! }
//!
//! // During setup — register every concrete implementation once:
//! let mut registry = TypeRegistry::<dyn Brain>::new();
//! registry.register::<IdleBrain>(|| Box::new(IdleBrain::default()));
//! registry.register::<PatrolBrain>(|| Box::new(PatrolBrain::default()));
//!
//! // Per field — state lives as long as the inspector panel:
//! let marker = SelectorMarker::default();
//! let mut state = SelectorState::new();
//! let mut brain: Option<Box<dyn Brain>> = None;
//!
//! // During frame, render into any egui::Ui container:
//! show_selector(ui, "brain", &marker, &registry, &mut state, &mut brain);
//! ```
//!
//! There is no global registry: the caller owns the [`TypeRegistry`] and each
//! field's [`SelectorState`], and passes both into every draw. All calls are
//! expected to run on the UI thread inside the host's draw callback.

mod error;
mod field;
mod marker;
pub mod registry;
pub mod ui;

pub use error::SelectorError;
pub use field::PolyField;
pub use marker::SelectorMarker;
pub use registry::{Candidates, TypeRegistry, type_key, value_key};
pub use ui::{SelectorState, show_selector, show_selector_list};
