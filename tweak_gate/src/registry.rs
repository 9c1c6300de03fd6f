//! Interface to the registry that stores and edits tweaks.
//!
//! The factories in [`crate::factory`] never own tweak state. They describe
//! each tweak as a [`Registration`] and hand it to a [`TweakRegistry`], which
//! answers with a [`Binding`] linking the resulting handle to any override the
//! registry holds. [`crate::MemoryRegistry`] is the in-process
//! implementation shipped with this crate.

use std::fmt;
use std::sync::Arc;

use crate::path::TweakPath;
use crate::value::{TweakKind, TweakValue};

/// Shared callback carried by action tweaks.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Kind-specific data accompanying a registration.
#[derive(Clone)]
pub enum Auxiliary {
    /// Titles of the choices offered by a choice tweak, in order.
    Choices(Vec<String>),
    /// Callback run when an action tweak is triggered.
    Action(Action),
}

impl fmt::Debug for Auxiliary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choices(titles) => f.debug_tuple("Choices").field(titles).finish(),
            Self::Action(_) => f.debug_tuple("Action").field(&"<callback>").finish(),
        }
    }
}

/// Everything a registry is told about one tweak.
///
/// With tweaks disabled `path` and `auxiliary` are both `None`; registries
/// must then return [`Binding::unregistered`] without recording anything.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Registration {
    /// Kind of the tweak.
    pub kind: TweakKind,
    /// Location in the editing tools, absent when tweaks are disabled.
    pub path: Option<TweakPath>,
    /// Value reported while no override exists.
    ///
    /// `None` for actions, and for choice tweaks whose default is not one of
    /// the offered choices (or whose choices were not evaluated).
    pub default: Option<TweakValue>,
    /// Choice titles or callback, absent when tweaks are disabled.
    pub auxiliary: Option<Auxiliary>,
}

impl Registration {
    pub(crate) const fn new(
        kind: TweakKind,
        path: Option<TweakPath>,
        default: Option<TweakValue>,
        auxiliary: Option<Auxiliary>,
    ) -> Self {
        Self {
            kind,
            path,
            default,
            auxiliary,
        }
    }

    /// Returns `true` when the registration carries a path.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Choice titles, when this is a choice registration with choices.
    #[must_use]
    pub fn choice_titles(&self) -> Option<&[String]> {
        match &self.auxiliary {
            Some(Auxiliary::Choices(titles)) => Some(titles.as_slice()),
            _ => None,
        }
    }

    /// Callback, when this is an action registration with one.
    #[must_use]
    pub const fn action(&self) -> Option<&Action> {
        match &self.auxiliary {
            Some(Auxiliary::Action(action)) => Some(action),
            _ => None,
        }
    }
}

/// Live view of the override a registry holds for one tweak.
pub trait OverrideSource: Send + Sync {
    /// Current override, or `None` when the tweak should report its default.
    fn current(&self) -> Option<TweakValue>;
}

/// Link between a tweak handle and its registry.
///
/// Handles consult the binding on every read, so overrides applied through
/// the registry become visible immediately.
#[derive(Clone, Default)]
pub struct Binding {
    source: Option<Arc<dyn OverrideSource>>,
}

impl Binding {
    /// Binding of a tweak the registry did not record. Reads always fall
    /// back to the default.
    #[must_use]
    pub const fn unregistered() -> Self {
        Self { source: None }
    }

    /// Binding backed by a registry-owned override source.
    #[must_use]
    pub fn live(source: Arc<dyn OverrideSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Returns `true` when a registry is backing this binding.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.source.is_some()
    }

    /// Current override, if any.
    #[must_use]
    pub fn current(&self) -> Option<TweakValue> {
        self.source.as_ref().and_then(|source| source.current())
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("registered", &self.is_registered())
            .finish()
    }
}

/// Registration mechanism the factories forward to.
///
/// Implementations own storage, validation and any editing surface. Errors
/// are returned to the factory's caller unchanged.
pub trait TweakRegistry {
    /// Error reported when a registration is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Records a tweak and returns the binding its handle reads from.
    ///
    /// A registration without a path must yield
    /// [`Binding::unregistered`] and leave the registry untouched.
    ///
    /// # Errors
    ///
    /// Returns the implementation's error when it rejects the registration.
    fn register(&self, registration: Registration) -> Result<Binding, Self::Error>;
}

impl<R: TweakRegistry + ?Sized> TweakRegistry for &R {
    type Error = R::Error;

    fn register(&self, registration: Registration) -> Result<Binding, Self::Error> {
        (**self).register(registration)
    }
}

impl<R: TweakRegistry + ?Sized> TweakRegistry for Box<R> {
    type Error = R::Error;

    fn register(&self, registration: Registration) -> Result<Binding, Self::Error> {
        (**self).register(registration)
    }
}

impl<R: TweakRegistry + ?Sized> TweakRegistry for Arc<R> {
    type Error = R::Error;

    fn register(&self, registration: Registration) -> Result<Binding, Self::Error> {
        (**self).register(registration)
    }
}
