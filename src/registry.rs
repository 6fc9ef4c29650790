//! Explicit registry of selectable candidate types.
//!
//! Instead of scanning loaded code for subtypes, every concrete type that can
//! be chosen for a polymorphic field is registered once, during setup, into a
//! [`TypeRegistry`] keyed by a stable identity string. Each entry carries a
//! factory producing a default instance behind the field's capability trait,
//! so the selector can both enumerate candidates and construct the chosen
//! one. Registration order does not matter; candidates are enumerated in key
//! order so the dropdown is deterministic.

use std::any::TypeId;
use std::collections::BTreeMap;

use crate::PolyField;
use crate::error::SelectorError;

/// Display name of the synthetic "no value" candidate.
pub const NULL_DISPLAY_NAME: &str = "<null>";

/// Returns the stable identity key for a type: the defining crate's short
/// name followed by the fully qualified type name, space separated
/// (e.g. `"my_game my_game::ai::IdleBrain"`).
///
/// This is the same composite a serialization layer would use to tag a stored
/// polymorphic value's runtime type, which is what makes stored values
/// matchable against registered candidates.
pub fn type_key<T: 'static>() -> String {
    key_from_name(std::any::type_name::<T>())
}

/// Returns the identity key of a stored value's concrete runtime type.
///
/// Equals [`type_key`] of the concrete type, provided the value's
/// [`PolyField::type_name`] impl returns `std::any::type_name::<Self>()`.
pub fn value_key<B: PolyField + ?Sized>(value: &B) -> String {
    key_from_name(value.type_name())
}

fn key_from_name(type_name: &str) -> String {
    let krate = type_name.split("::").next().unwrap_or(type_name);
    format!("{krate} {type_name}")
}

/// Type-erased registration record for a single candidate type.
struct TypeEntry<B: ?Sized> {
    /// The type's printable fully qualified name.
    display_name: &'static str,
    /// Handle of the concrete type.
    type_id: TypeId,
    /// Whether this entry belongs to the excluded widget category.
    widget: bool,
    /// Default-constructs an instance. `None` for abstract entries.
    create_fn: Option<fn() -> Box<B>>,
}

/// An ordered snapshot of selectable candidates.
///
/// The three sequences are parallel and always the same length. Entry 0 is
/// the synthetic "no value" candidate: handle `None`, display name
/// [`NULL_DISPLAY_NAME`], identity key `""`.
pub struct Candidates {
    /// Nullable type handles, one per candidate.
    pub handles: Vec<Option<TypeId>>,
    /// Human-readable labels, parallel to `handles`.
    pub display_names: Vec<&'static str>,
    /// Stable identity keys, parallel to `handles`.
    pub type_keys: Vec<String>,
}

impl Candidates {
    /// Number of candidates, including the synthetic entry.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Always false — the synthetic entry is unconditionally present.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Registry of candidate types for polymorphic fields of capability `B`
/// (typically a trait object such as `dyn Brain`).
///
/// The registry is an explicit, caller-owned value — there is no process
/// global. Register every concrete implementation during setup, then share
/// the registry immutably with each field's draw call. Because factories
/// must return `Box<B>`, assignability of a candidate to the field's base
/// trait is checked by the compiler at registration.
pub struct TypeRegistry<B: ?Sized> {
    entries: BTreeMap<String, TypeEntry<B>>,
}

impl<B: ?Sized> TypeRegistry<B> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registers a concrete candidate type with its factory.
    ///
    /// The factory default-constructs the instance assigned to the field
    /// when this candidate is selected. Registering the same type twice
    /// replaces the previous entry and logs a warning, so a type never
    /// appears more than once among the candidates.
    pub fn register<T: 'static>(&mut self, create_fn: fn() -> Box<B>) {
        self.insert_entry::<T>(false, Some(create_fn));
    }

    /// Registers a concrete candidate belonging to the widget category.
    ///
    /// Widget entries are skipped during candidate enumeration unless the
    /// field's [`SelectorMarker`](crate::SelectorMarker) opts in.
    pub fn register_widget<T: 'static>(&mut self, create_fn: fn() -> Box<B>) {
        self.insert_entry::<T>(true, Some(create_fn));
    }

    /// Registers an abstract entry: visible to key lookups (so construction
    /// attempts produce a precise error) but never offered as a candidate.
    pub fn register_abstract<T: 'static>(&mut self) {
        self.insert_entry::<T>(false, None);
    }

    fn insert_entry<T: 'static>(&mut self, widget: bool, create_fn: Option<fn() -> Box<B>>) {
        let key = type_key::<T>();
        let entry = TypeEntry {
            display_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            widget,
            create_fn,
        };
        if self.entries.insert(key.clone(), entry).is_some() {
            log::warn!("type '{key}' registered twice; previous entry replaced");
        }
    }

    /// Number of registered entries (abstract entries included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry is registered under the given identity key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Default-constructs an instance of the type registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownType`] if no entry matches the key,
    /// or [`SelectorError::NotConstructible`] if the entry was registered
    /// via [`register_abstract`](TypeRegistry::register_abstract).
    pub fn create(&self, key: &str) -> Result<Box<B>, SelectorError> {
        let entry = self.entries.get(key).ok_or_else(|| SelectorError::UnknownType {
            key: key.to_string(),
        })?;
        match entry.create_fn {
            Some(f) => Ok(f()),
            None => Err(SelectorError::NotConstructible {
                key: key.to_string(),
            }),
        }
    }

    /// Enumerates the selectable candidates in key order.
    ///
    /// The synthetic "no value" entry is always first. Abstract entries are
    /// never included; widget entries are included only when
    /// `include_widgets` is set.
    pub fn candidates(&self, include_widgets: bool) -> Candidates {
        let mut handles = vec![None];
        let mut display_names = vec![NULL_DISPLAY_NAME];
        let mut type_keys = vec![String::new()];

        for (key, entry) in &self.entries {
            if entry.create_fn.is_none() {
                continue;
            }
            if entry.widget && !include_widgets {
                continue;
            }
            handles.push(Some(entry.type_id));
            display_names.push(entry.display_name);
            type_keys.push(key.clone());
        }

        Candidates {
            handles,
            display_names,
            type_keys,
        }
    }
}

impl<B: ?Sized> Default for TypeRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}
