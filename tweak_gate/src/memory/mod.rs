//! In-process tweak registry.
//!
//! [`MemoryRegistry`] records every tweak declared with a path, keeps one
//! override slot per path, and lets debug tooling list, edit and trigger
//! tweaks while the program runs. Handles observe edits immediately.
//!
//! Registering the same path twice with the same kind is tolerated: both
//! handles stay valid and share the path's override. Registering it with a
//! different kind, or as a choice with different titles, is rejected. Choice
//! handles sharing a path share one selected index.

mod error;
mod parse;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

pub use self::error::RegistryError;
use crate::path::TweakPath;
use crate::registry::{Action, Auxiliary, Binding, OverrideSource, Registration, TweakRegistry};
use crate::value::{TweakKind, TweakValue};

#[derive(Debug, Default)]
struct OverrideSlot(RwLock<Option<TweakValue>>);

impl OverrideSource for OverrideSlot {
    fn current(&self) -> Option<TweakValue> {
        self.0.read().clone()
    }
}

struct Entry {
    kind: TweakKind,
    default: Option<TweakValue>,
    titles: Vec<String>,
    actions: Vec<Action>,
    registrations: usize,
    slot: Arc<OverrideSlot>,
}

impl Entry {
    fn new(registration: Registration) -> Self {
        let mut entry = Self {
            kind: registration.kind,
            default: registration.default,
            titles: Vec::new(),
            actions: Vec::new(),
            registrations: 1,
            slot: Arc::default(),
        };
        match registration.auxiliary {
            Some(Auxiliary::Choices(titles)) => entry.titles = titles,
            Some(Auxiliary::Action(action)) => entry.actions.push(action),
            None => {}
        }
        entry
    }

    fn snapshot(&self, path: &TweakPath) -> EntrySnapshot {
        EntrySnapshot {
            path: path.clone(),
            kind: self.kind,
            default: self.default.clone(),
            current: self.slot.current(),
            choices: (self.kind == TweakKind::Choice).then(|| self.titles.clone()),
            registrations: self.registrations,
        }
    }
}

#[derive(Default)]
struct State {
    entries: HashMap<TweakPath, Entry>,
    order: Vec<TweakPath>,
}

impl State {
    fn entry(&self, path: &TweakPath) -> Result<&Entry, RegistryError> {
        self.entries
            .get(path)
            .ok_or_else(|| RegistryError::UnknownPath { path: path.clone() })
    }
}

/// Description of one registered tweak, as shown by an editing tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct EntrySnapshot {
    /// Location of the tweak.
    pub path: TweakPath,
    /// Kind of the tweak.
    pub kind: TweakKind,
    /// Value reported without an override.
    pub default: Option<TweakValue>,
    /// Active override, if any.
    pub current: Option<TweakValue>,
    /// Choice titles for choice tweaks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    /// Number of handles registered under the path.
    pub registrations: usize,
}

/// Thread-safe registry holding tweaks and their overrides in memory.
///
/// ```rust
/// use tweak_gate::{MemoryRegistry, TweakPath, TweakValue, make_int_tweak};
///
/// # fn main() -> Result<(), tweak_gate::RegistryError> {
/// let registry = MemoryRegistry::new();
/// let count = make_int_tweak(&registry, || "Demo/Count".into(), 5)?;
///
/// if tweak_gate::TWEAKS_ENABLED {
///     registry.set_override(&TweakPath::from("Demo/Count"), TweakValue::Int(8))?;
///     assert_eq!(count.current_value(), 8);
///
///     registry.clear_override(&TweakPath::from("Demo/Count"))?;
/// }
/// assert_eq!(count.current_value(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct MemoryRegistry {
    state: RwLock<State>,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct registered paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().order.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when a tweak is registered under `path`.
    #[must_use]
    pub fn contains(&self, path: &TweakPath) -> bool {
        self.state.read().entries.contains_key(path)
    }

    /// Snapshot of every registered tweak in registration order.
    #[must_use]
    pub fn entries(&self) -> Vec<EntrySnapshot> {
        let state = self.state.read();
        state
            .order
            .iter()
            .filter_map(|path| state.entries.get(path).map(|entry| entry.snapshot(path)))
            .collect()
    }

    /// Snapshot of the tweak registered under `path`.
    #[must_use]
    pub fn entry(&self, path: &TweakPath) -> Option<EntrySnapshot> {
        self.state
            .read()
            .entries
            .get(path)
            .map(|entry| entry.snapshot(path))
    }

    /// Overrides the value of the tweak at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownPath`] for unregistered paths,
    /// [`RegistryError::NotEditable`] for actions,
    /// [`RegistryError::KindMismatch`] when `value` has the wrong kind, and
    /// [`RegistryError::ChoiceOutOfRange`] for choice indices past the list.
    pub fn set_override(&self, path: &TweakPath, value: TweakValue) -> Result<(), RegistryError> {
        let state = self.state.read();
        let entry = state.entry(path)?;
        Self::check_value(path, entry, &value)?;
        tracing::debug!(%path, %value, "tweak overridden");
        *entry.slot.0.write() = Some(value);
        Ok(())
    }

    /// Parses `raw` according to the tweak's kind and applies it as an
    /// override, returning the parsed value.
    ///
    /// Booleans accept `true/false`, `on/off`, `yes/no` and `1/0`; choices
    /// accept a title or an index.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidValue`] when `raw` cannot be parsed,
    /// otherwise the same errors as [`MemoryRegistry::set_override`].
    pub fn set_override_str(&self, path: &TweakPath, raw: &str) -> Result<TweakValue, RegistryError> {
        let value = {
            let state = self.state.read();
            let entry = state.entry(path)?;
            if entry.kind == TweakKind::Action {
                return Err(RegistryError::NotEditable { path: path.clone() });
            }
            parse::parse_value(entry.kind, &entry.titles, raw).ok_or_else(|| {
                RegistryError::InvalidValue {
                    path: path.clone(),
                    kind: entry.kind,
                    raw: raw.to_owned(),
                }
            })?
        };
        self.set_override(path, value.clone())?;
        Ok(value)
    }

    /// Removes the override of the tweak at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownPath`] for unregistered paths.
    pub fn clear_override(&self, path: &TweakPath) -> Result<(), RegistryError> {
        let state = self.state.read();
        let entry = state.entry(path)?;
        tracing::debug!(%path, "tweak override cleared");
        *entry.slot.0.write() = None;
        Ok(())
    }

    /// Removes every override.
    pub fn clear_all(&self) {
        let state = self.state.read();
        for entry in state.entries.values() {
            *entry.slot.0.write() = None;
        }
    }

    /// Runs every callback registered under `path` and returns how many ran.
    ///
    /// Callbacks run after the registry lock is released, so they may use the
    /// registry themselves.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownPath`] for unregistered paths and
    /// [`RegistryError::NotAnAction`] when the tweak holds a value.
    pub fn trigger(&self, path: &TweakPath) -> Result<usize, RegistryError> {
        let actions = {
            let state = self.state.read();
            let entry = state.entry(path)?;
            if entry.kind != TweakKind::Action {
                return Err(RegistryError::NotAnAction { path: path.clone() });
            }
            entry.actions.clone()
        };
        tracing::debug!(%path, count = actions.len(), "triggering tweak action");
        for action in &actions {
            action();
        }
        Ok(actions.len())
    }

    fn check_value(
        path: &TweakPath,
        entry: &Entry,
        value: &TweakValue,
    ) -> Result<(), RegistryError> {
        if entry.kind == TweakKind::Action {
            return Err(RegistryError::NotEditable { path: path.clone() });
        }
        if value.kind() != entry.kind {
            return Err(RegistryError::KindMismatch {
                path: path.clone(),
                registered: entry.kind,
                requested: value.kind(),
            });
        }
        if let TweakValue::Choice(index) = *value {
            if index >= entry.titles.len() {
                return Err(RegistryError::ChoiceOutOfRange {
                    path: path.clone(),
                    index,
                    available: entry.titles.len(),
                });
            }
        }
        Ok(())
    }

    fn validate_path(path: &TweakPath) -> Result<(), RegistryError> {
        if path.is_empty() {
            return Err(RegistryError::EmptyPath);
        }
        if path.segments().iter().any(|segment| segment.trim().is_empty()) {
            return Err(RegistryError::EmptySegment { path: path.clone() });
        }
        Ok(())
    }
}

impl TweakRegistry for MemoryRegistry {
    type Error = RegistryError;

    fn register(&self, registration: Registration) -> Result<Binding, Self::Error> {
        let Some(path) = registration.path.clone() else {
            return Ok(Binding::unregistered());
        };
        Self::validate_path(&path)?;

        let mut state = self.state.write();
        if let Some(entry) = state.entries.get_mut(&path) {
            if entry.kind != registration.kind {
                return Err(RegistryError::KindMismatch {
                    path,
                    registered: entry.kind,
                    requested: registration.kind,
                });
            }
            match registration.auxiliary {
                Some(Auxiliary::Choices(titles)) if titles != entry.titles => {
                    return Err(RegistryError::ChoicesMismatch {
                        path,
                        registered: entry.titles.clone(),
                        requested: titles,
                    });
                }
                Some(Auxiliary::Action(action)) => entry.actions.push(action),
                _ => {}
            }
            tracing::warn!(%path, kind = %entry.kind, "tweak path registered more than once");
            entry.registrations += 1;
            return Ok(Binding::live(entry.slot.clone()));
        }

        let entry = Entry::new(registration);
        let binding = Binding::live(entry.slot.clone());
        state.entries.insert(path.clone(), entry);
        state.order.push(path);
        Ok(binding)
    }
}

impl std::fmt::Debug for MemoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryRegistry")
            .field("entries", &self.len())
            .finish()
    }
}
