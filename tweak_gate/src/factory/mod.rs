//! Factories declaring tweaks against a registry.
//!
//! Each factory takes the tweak's path (and, for choice tweaks, its choices)
//! as a closure. With tweaks enabled the closures run exactly once and the
//! results are registered. With tweaks disabled they are never called and
//! the registry only sees the default, so release builds never build paths or
//! choice lists.
//!
//! Errors returned by the registry are passed through untouched. The factories
//! add no validation of their own so enabled and disabled builds differ only
//! in whether the registry is consulted with real data.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::choice::Choice;
use crate::handle::{ActionTweak, BoolTweak, ChoiceTweak, DoubleTweak, IntTweak, StringTweak, Tweak};
use crate::mode::{ActiveMode, BuildMode};
use crate::path::TweakPath;
use crate::registry::{Action, Auxiliary, Binding, Registration, TweakRegistry};
use crate::value::{TweakKind, TweakScalar, TweakValue};

/// Declares tweaks against a registry under build mode `M`.
///
/// [`TweakFactory::new`] only builds factories for [`ActiveMode`], so every
/// declaration in a binary follows the `tweaks` feature. The `make_*`
/// functions are shorthands for a one-off factory.
///
/// ```rust
/// use tweak_gate::{MemoryRegistry, TweakFactory, TWEAKS_ENABLED};
///
/// # fn main() -> Result<(), tweak_gate::RegistryError> {
/// let registry = MemoryRegistry::new();
/// let factory = TweakFactory::new(&registry);
/// let retries = factory.int_tweak(|| "Network/Retries".into(), 3)?;
/// assert_eq!(retries.current_value(), 3);
/// assert_eq!(registry.len(), usize::from(TWEAKS_ENABLED));
/// # Ok(())
/// # }
/// ```
pub struct TweakFactory<'r, R: ?Sized, M = ActiveMode> {
    registry: &'r R,
    mode: PhantomData<M>,
}

impl<'r, R: ?Sized> TweakFactory<'r, R> {
    /// Creates a factory forwarding to `registry` under the build's mode.
    #[must_use]
    pub const fn new(registry: &'r R) -> Self {
        Self {
            registry,
            mode: PhantomData,
        }
    }
}

#[cfg(any(test, feature = "test-util"))]
impl<'r, R: ?Sized, M: BuildMode> TweakFactory<'r, R, M> {
    /// Creates a factory forwarding to `registry` under mode `M`, whatever
    /// the `tweaks` feature says. Only available to tests.
    #[must_use]
    pub const fn with_mode(registry: &'r R) -> Self {
        Self {
            registry,
            mode: PhantomData,
        }
    }
}

impl<R, M> TweakFactory<'_, R, M>
where
    R: TweakRegistry + ?Sized,
    M: BuildMode,
{
    /// Declares a boolean tweak.
    ///
    /// # Errors
    ///
    /// Returns the registry's error if it rejects the registration.
    pub fn bool_tweak<P>(&self, path: P, default: bool) -> Result<BoolTweak, R::Error>
    where
        P: FnOnce() -> TweakPath,
    {
        self.scalar(path, default)
    }

    /// Declares a string tweak.
    ///
    /// # Errors
    ///
    /// Returns the registry's error if it rejects the registration.
    pub fn string_tweak<P>(
        &self,
        path: P,
        default: impl Into<String>,
    ) -> Result<StringTweak, R::Error>
    where
        P: FnOnce() -> TweakPath,
    {
        self.scalar(path, default.into())
    }

    /// Declares an integer tweak.
    ///
    /// # Errors
    ///
    /// Returns the registry's error if it rejects the registration.
    pub fn int_tweak<P>(&self, path: P, default: i64) -> Result<IntTweak, R::Error>
    where
        P: FnOnce() -> TweakPath,
    {
        self.scalar(path, default)
    }

    /// Declares a floating-point tweak.
    ///
    /// # Errors
    ///
    /// Returns the registry's error if it rejects the registration.
    pub fn double_tweak<P>(&self, path: P, default: f64) -> Result<DoubleTweak, R::Error>
    where
        P: FnOnce() -> TweakPath,
    {
        self.scalar(path, default)
    }

    /// Declares a tweak selecting one of `choices`.
    ///
    /// The default need not be one of the choices. When it is, the registry
    /// is told its index so the editing tools can mark it. An empty list is
    /// forwarded as-is.
    ///
    /// # Errors
    ///
    /// Returns the registry's error if it rejects the registration.
    pub fn choice_tweak<T, P, C>(
        &self,
        path: P,
        default: T,
        choices: C,
    ) -> Result<ChoiceTweak<T>, R::Error>
    where
        T: Clone + PartialEq,
        P: FnOnce() -> TweakPath,
        C: FnOnce() -> Vec<Choice<T>>,
    {
        if !M::ENABLED {
            let binding = self.forward(Registration::new(TweakKind::Choice, None, None, None))?;
            return Ok(ChoiceTweak::new(None, default, None, binding));
        }

        let path = path();
        let choices = choices();
        let default_index = choices
            .iter()
            .position(|choice| *choice.value() == default)
            .map(TweakValue::Choice);
        let titles = choices
            .iter()
            .map(|choice| choice.title().to_owned())
            .collect();
        let binding = self.forward(Registration::new(
            TweakKind::Choice,
            Some(path.clone()),
            default_index,
            Some(Auxiliary::Choices(titles)),
        ))?;
        Ok(ChoiceTweak::new(Some(path), default, Some(choices), binding))
    }

    /// Declares a tweak running `action` when triggered.
    ///
    /// With tweaks disabled the callback is dropped without being stored.
    ///
    /// # Errors
    ///
    /// Returns the registry's error if it rejects the registration.
    pub fn action_tweak<P, F>(&self, path: P, action: F) -> Result<ActionTweak, R::Error>
    where
        P: FnOnce() -> TweakPath,
        F: Fn() + Send + Sync + 'static,
    {
        if !M::ENABLED {
            let binding = self.forward(Registration::new(TweakKind::Action, None, None, None))?;
            return Ok(ActionTweak::new(None, None, binding));
        }

        let path = path();
        let action: Action = Arc::new(action);
        let binding = self.forward(Registration::new(
            TweakKind::Action,
            Some(path.clone()),
            None,
            Some(Auxiliary::Action(Arc::clone(&action))),
        ))?;
        Ok(ActionTweak::new(Some(path), Some(action), binding))
    }

    fn scalar<T, P>(&self, path: P, default: T) -> Result<Tweak<T>, R::Error>
    where
        T: TweakScalar,
        P: FnOnce() -> TweakPath,
    {
        let default_value = Some(default.clone().into_value());
        if !M::ENABLED {
            let binding = self.forward(Registration::new(T::KIND, None, default_value, None))?;
            return Ok(Tweak::new(None, default, binding));
        }

        let path = path();
        let binding = self.forward(Registration::new(
            T::KIND,
            Some(path.clone()),
            default_value,
            None,
        ))?;
        Ok(Tweak::new(Some(path), default, binding))
    }

    fn forward(&self, registration: Registration) -> Result<Binding, R::Error> {
        match &registration.path {
            Some(path) => tracing::debug!(kind = %registration.kind, %path, "registering tweak"),
            None => tracing::trace!(kind = %registration.kind, "tweak registration suppressed"),
        }
        self.registry.register(registration)
    }
}

/// Declares a boolean tweak for the active build mode.
///
/// ```rust
/// use tweak_gate::{MemoryRegistry, make_bool_tweak};
///
/// # fn main() -> Result<(), tweak_gate::RegistryError> {
/// let registry = MemoryRegistry::new();
/// let flag = make_bool_tweak(&registry, || "Demo/Flag".into(), true)?;
/// assert!(flag.current_value());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the registry's error if it rejects the registration.
pub fn make_bool_tweak<R, P>(registry: &R, path: P, default: bool) -> Result<BoolTweak, R::Error>
where
    R: TweakRegistry + ?Sized,
    P: FnOnce() -> TweakPath,
{
    TweakFactory::<R, ActiveMode>::new(registry).bool_tweak(path, default)
}

/// Declares a string tweak for the active build mode.
///
/// # Errors
///
/// Returns the registry's error if it rejects the registration.
pub fn make_string_tweak<R, P>(
    registry: &R,
    path: P,
    default: impl Into<String>,
) -> Result<StringTweak, R::Error>
where
    R: TweakRegistry + ?Sized,
    P: FnOnce() -> TweakPath,
{
    TweakFactory::<R, ActiveMode>::new(registry).string_tweak(path, default)
}

/// Declares an integer tweak for the active build mode.
///
/// # Errors
///
/// Returns the registry's error if it rejects the registration.
pub fn make_int_tweak<R, P>(registry: &R, path: P, default: i64) -> Result<IntTweak, R::Error>
where
    R: TweakRegistry + ?Sized,
    P: FnOnce() -> TweakPath,
{
    TweakFactory::<R, ActiveMode>::new(registry).int_tweak(path, default)
}

/// Declares a floating-point tweak for the active build mode.
///
/// # Errors
///
/// Returns the registry's error if it rejects the registration.
pub fn make_double_tweak<R, P>(
    registry: &R,
    path: P,
    default: f64,
) -> Result<DoubleTweak, R::Error>
where
    R: TweakRegistry + ?Sized,
    P: FnOnce() -> TweakPath,
{
    TweakFactory::<R, ActiveMode>::new(registry).double_tweak(path, default)
}

/// Declares a choice tweak for the active build mode.
///
/// ```rust
/// use tweak_gate::{Choice, MemoryRegistry, make_choice_tweak};
///
/// # fn main() -> Result<(), tweak_gate::RegistryError> {
/// let registry = MemoryRegistry::new();
/// let backend = make_choice_tweak(
///     &registry,
///     || "Network/Backend".into(),
///     "prod",
///     || vec![Choice::new("Production", "prod"), Choice::new("Staging", "staging")],
/// )?;
/// assert_eq!(backend.current_value(), "prod");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the registry's error if it rejects the registration.
pub fn make_choice_tweak<R, T, P, C>(
    registry: &R,
    path: P,
    default: T,
    choices: C,
) -> Result<ChoiceTweak<T>, R::Error>
where
    R: TweakRegistry + ?Sized,
    T: Clone + PartialEq,
    P: FnOnce() -> TweakPath,
    C: FnOnce() -> Vec<Choice<T>>,
{
    TweakFactory::<R, ActiveMode>::new(registry).choice_tweak(path, default, choices)
}

/// Declares an action tweak for the active build mode.
///
/// # Errors
///
/// Returns the registry's error if it rejects the registration.
pub fn make_action_tweak<R, P, F>(registry: &R, path: P, action: F) -> Result<ActionTweak, R::Error>
where
    R: TweakRegistry + ?Sized,
    P: FnOnce() -> TweakPath,
    F: Fn() + Send + Sync + 'static,
{
    TweakFactory::<R, ActiveMode>::new(registry).action_tweak(path, action)
}

#[cfg(test)]
mod tests;
