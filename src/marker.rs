//! Per-field selector configuration.

/// Immutable configuration attached to one selectable field.
///
/// The marker is the declarative half of the selector: it is created once
/// during setup, never mutated, and read by the renderer on the field's first
/// draw. Its single flag controls whether widget-category types (entries
/// registered via [`TypeRegistry::register_widget`](crate::TypeRegistry::register_widget))
/// appear among the candidates. Widget types are excluded by default since
/// they normally belong to the editor UI itself rather than to game data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorMarker {
    include_widgets: bool,
}

impl SelectorMarker {
    /// Creates a marker with the given widget-inclusion flag.
    pub fn new(include_widgets: bool) -> Self {
        Self { include_widgets }
    }

    /// Whether widget-category types are offered as candidates.
    pub fn include_widgets(&self) -> bool {
        self.include_widgets
    }
}
