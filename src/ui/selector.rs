//! Selector dropdown rendering.

use crate::PolyField;
use crate::marker::SelectorMarker;
use crate::registry::TypeRegistry;

use super::SelectorState;

/// Renders the selector row for a scalar polymorphic field.
///
/// One labeled row: the field label, then a dropdown over the candidate type
/// names filling the remaining row width. Picking a different entry replaces
/// the slot's value (cleared for `<null>`, otherwise a fresh default instance
/// of the chosen type — prior nested edits on the replaced value are lost).
/// While the slot holds a value, its own fields are rendered indented below
/// the row via [`PolyField::inspect_ui`].
///
/// `label` doubles as the id salt for the dropdown, so two selectors inside
/// the same container need distinct labels.
///
/// The first call initializes `state` from the registry; pass the same state
/// for the same field on every frame. If applying a selection fails because
/// the registry changed after the state's snapshot, the failure is logged and
/// the slot is left unchanged.
pub fn show_selector<B: PolyField + ?Sized>(
    ui: &mut egui::Ui,
    label: &str,
    marker: &SelectorMarker,
    registry: &TypeRegistry<B>,
    state: &mut SelectorState,
    slot: &mut Option<Box<B>>,
) {
    state.ensure_initialized(registry, marker, slot);

    let mut selected = state.current_index();
    ui.horizontal(|ui| {
        ui.label(label);
        let selected_text = selected.map(|i| state.display_names()[i]).unwrap_or("");
        egui::ComboBox::from_id_salt((label, "poly_select"))
            .width(ui.available_width())
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (i, name) in state.display_names().iter().enumerate() {
                    ui.selectable_value(&mut selected, Some(i), *name);
                }
            });
    });

    if let Some(index) = selected
        && let Err(err) = state.apply_selection(index, registry, slot)
    {
        log::error!("selector '{label}': {err}");
    }

    if let Some(value) = slot.as_mut() {
        ui.indent((label, "poly_select_nested"), |ui| {
            value.inspect_ui(ui);
        });
    }
}

/// Renders one selector row per element of a sequence field.
///
/// Candidates are enumerated against the element type, not the sequence.
/// `states` is resized to match `slots`, so elements keep their selector
/// state across frames as long as the caller keeps the vector alive.
/// Element rows are labeled `label[index]`.
pub fn show_selector_list<B: PolyField + ?Sized>(
    ui: &mut egui::Ui,
    label: &str,
    marker: &SelectorMarker,
    registry: &TypeRegistry<B>,
    states: &mut Vec<SelectorState>,
    slots: &mut [Option<Box<B>>],
) {
    states.resize_with(slots.len(), SelectorState::new);
    for (i, (state, slot)) in states.iter_mut().zip(slots.iter_mut()).enumerate() {
        show_selector(ui, &format!("{label}[{i}]"), marker, registry, state, slot);
    }
}
