//! Registries that capture or refuse what factories forward.

use std::convert::Infallible;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use tweak_gate::{
    Action, Binding, OverrideSource, Registration, TweakKind, TweakPath, TweakRegistry,
    TweakValue,
};

/// What a factory sent for one registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRegistration {
    /// Kind of the tweak.
    pub kind: TweakKind,
    /// Forwarded path.
    pub path: Option<TweakPath>,
    /// Forwarded default.
    pub default: Option<TweakValue>,
    /// Forwarded choice titles.
    pub choices: Option<Vec<String>>,
    /// Whether a callback was forwarded.
    pub has_action: bool,
}

#[derive(Default)]
struct OverrideCell(RwLock<Option<TweakValue>>);

impl OverrideSource for OverrideCell {
    fn current(&self) -> Option<TweakValue> {
        self.0.read().clone()
    }
}

struct Record {
    summary: RecordedRegistration,
    action: Option<Action>,
    cell: Arc<OverrideCell>,
}

/// Registry storing every registration it receives, including those without
/// a path, so tests can inspect exactly what was forwarded.
///
/// Each registration with a path gets its own override cell: unlike
/// [`tweak_gate::MemoryRegistry`] nothing is shared between calls.
#[derive(Default)]
pub struct RecordingRegistry {
    records: Mutex<Vec<Record>>,
}

impl RecordingRegistry {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registration received so far, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedRegistration> {
        self.records
            .lock()
            .iter()
            .map(|record| record.summary.clone())
            .collect()
    }

    /// Most recent registration, if any.
    #[must_use]
    pub fn last(&self) -> Option<RecordedRegistration> {
        self.records.lock().last().map(|record| record.summary.clone())
    }

    /// Sets the override seen by the `index`-th registration's handle.
    /// Returns `false` when there is no such registration.
    pub fn set_override(&self, index: usize, value: TweakValue) -> bool {
        let records = self.records.lock();
        let Some(record) = records.get(index) else {
            return false;
        };
        *record.cell.0.write() = Some(value);
        true
    }

    /// Runs the callbacks forwarded under `path` and returns how many ran.
    pub fn trigger(&self, path: &TweakPath) -> usize {
        let actions: Vec<Action> = self
            .records
            .lock()
            .iter()
            .filter(|record| record.summary.path.as_ref() == Some(path))
            .filter_map(|record| record.action.clone())
            .collect();
        for action in &actions {
            action();
        }
        actions.len()
    }
}

impl TweakRegistry for RecordingRegistry {
    type Error = Infallible;

    fn register(&self, registration: Registration) -> Result<Binding, Self::Error> {
        let summary = RecordedRegistration {
            kind: registration.kind,
            path: registration.path.clone(),
            default: registration.default.clone(),
            choices: registration.choice_titles().map(<[String]>::to_vec),
            has_action: registration.action().is_some(),
        };
        let cell = Arc::new(OverrideCell::default());
        let binding = if registration.is_enabled() {
            Binding::live(cell.clone())
        } else {
            Binding::unregistered()
        };
        self.records.lock().push(Record {
            summary,
            action: registration.action().cloned(),
            cell,
        });
        Ok(binding)
    }
}

/// Error returned by [`RejectingRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("registration rejected: {reason}")]
pub struct Rejected {
    /// Why the registration was refused.
    pub reason: String,
}

/// Registry refusing every registration that carries a path.
#[derive(Debug, Clone)]
pub struct RejectingRegistry {
    reason: String,
}

impl RejectingRegistry {
    /// Creates a registry rejecting registrations with `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TweakRegistry for RejectingRegistry {
    type Error = Rejected;

    fn register(&self, registration: Registration) -> Result<Binding, Self::Error> {
        if registration.is_enabled() {
            return Err(Rejected {
                reason: self.reason.clone(),
            });
        }
        Ok(Binding::unregistered())
    }
}
