//! Capability trait for polymorphic field values.
//!
//! A field that wants a selector dropdown stores `Option<Box<dyn Base>>`
//! where `Base` is an object-safe trait with [`PolyField`] as a supertrait.
//! The supertrait gives the selector two things: the stored value's concrete
//! type name (for matching against registered candidates) and an inspector UI
//! for editing the value's own fields after it has been assigned.

/// Trait implemented by every type that can be stored in a selectable
/// polymorphic field.
///
/// Declare it as a supertrait of the field's base trait so that
/// `dyn Base` satisfies the renderer and registry bounds:
///
/// ```ignore
/// trait Brain: PolyField {
///     fn think(&mut self);
/// }
///
/// #[derive(Default)]
/// struct IdleBrain;
///
/// impl PolyField for IdleBrain {
///     fn type_name(&self) -> &'static str {
///         std::any::type_name::<Self>()
///     }
///
///     fn inspect_ui(&mut self, _ui: &mut egui::Ui) {}
/// }
/// ```
pub trait PolyField: Send + Sync + 'static {
    /// The fully qualified name of the concrete type
    /// (e.g. `"my_game::ai::IdleBrain"`).
    ///
    /// Implementations return `std::any::type_name::<Self>()`. The selector
    /// derives the value's identity key from this name, so it must match the
    /// type the value was registered as.
    fn type_name(&self) -> &'static str;

    /// Render an inspector UI for this value's fields.
    ///
    /// Drawn below the selector row while the field holds this value, so
    /// nested fields stay editable until the user picks a different type.
    fn inspect_ui(&mut self, ui: &mut egui::Ui);
}
