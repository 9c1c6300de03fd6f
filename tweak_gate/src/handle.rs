//! Handles returned by the factories.

use std::fmt;

use crate::choice::Choice;
use crate::path::TweakPath;
use crate::registry::{Action, Binding};
use crate::value::{TweakScalar, TweakValue};

/// A tweakable scalar value.
///
/// Reads return the registry's override while one exists and the default
/// otherwise. Handles built with tweaks disabled have no path and always
/// report the default.
#[derive(Debug, Clone)]
pub struct Tweak<T> {
    path: Option<TweakPath>,
    default: T,
    binding: Binding,
}

/// A tweakable boolean.
pub type BoolTweak = Tweak<bool>;
/// A tweakable string.
pub type StringTweak = Tweak<String>;
/// A tweakable integer.
pub type IntTweak = Tweak<i64>;
/// A tweakable floating-point number.
pub type DoubleTweak = Tweak<f64>;

impl<T: TweakScalar> Tweak<T> {
    pub(crate) const fn new(path: Option<TweakPath>, default: T, binding: Binding) -> Self {
        Self {
            path,
            default,
            binding,
        }
    }

    /// Value the tweak currently holds.
    #[must_use]
    pub fn current_value(&self) -> T {
        self.binding
            .current()
            .and_then(|value| T::from_value(&value))
            .unwrap_or_else(|| self.default.clone())
    }

    /// Value reported while no override exists.
    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default
    }

    /// Location of the tweak, `None` when tweaks are disabled.
    #[must_use]
    pub const fn path(&self) -> Option<&TweakPath> {
        self.path.as_ref()
    }

    /// Returns `true` when a registry is backing this tweak.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.binding.is_registered()
    }
}

impl Tweak<bool> {
    /// Shorthand for [`Tweak::current_value`] on switches.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.current_value()
    }
}

/// A tweak selecting one value out of a fixed list.
///
/// The registry tracks the selection by index; the handle maps it back to
/// the choice's value. An out-of-range selection reads as the default.
#[derive(Debug, Clone)]
pub struct ChoiceTweak<T> {
    path: Option<TweakPath>,
    default: T,
    choices: Option<Vec<Choice<T>>>,
    binding: Binding,
}

impl<T: Clone> ChoiceTweak<T> {
    pub(crate) const fn new(
        path: Option<TweakPath>,
        default: T,
        choices: Option<Vec<Choice<T>>>,
        binding: Binding,
    ) -> Self {
        Self {
            path,
            default,
            choices,
            binding,
        }
    }

    /// Value of the selected choice, or the default when nothing is selected.
    #[must_use]
    pub fn current_value(&self) -> T {
        self.selected()
            .map(|choice| choice.value().clone())
            .unwrap_or_else(|| self.default.clone())
    }

    /// Currently selected choice, if an override selects one.
    #[must_use]
    pub fn selected(&self) -> Option<&Choice<T>> {
        let Some(TweakValue::Choice(index)) = self.binding.current() else {
            return None;
        };
        self.choices.as_ref()?.get(index)
    }

    /// Value reported while no override exists.
    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default
    }

    /// Offered choices, `None` when tweaks are disabled.
    #[must_use]
    pub fn choices(&self) -> Option<&[Choice<T>]> {
        self.choices.as_deref()
    }

    /// Location of the tweak, `None` when tweaks are disabled.
    #[must_use]
    pub const fn path(&self) -> Option<&TweakPath> {
        self.path.as_ref()
    }

    /// Returns `true` when a registry is backing this tweak.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.binding.is_registered()
    }
}

/// A tweak running a callback when triggered from the editing tools.
#[derive(Clone)]
pub struct ActionTweak {
    path: Option<TweakPath>,
    action: Option<Action>,
    binding: Binding,
}

impl ActionTweak {
    pub(crate) const fn new(
        path: Option<TweakPath>,
        action: Option<Action>,
        binding: Binding,
    ) -> Self {
        Self {
            path,
            action,
            binding,
        }
    }

    /// Runs the callback. Does nothing when tweaks are disabled.
    pub fn invoke(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }

    /// Returns `true` when the handle carries a callback.
    #[must_use]
    pub const fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Location of the tweak, `None` when tweaks are disabled.
    #[must_use]
    pub const fn path(&self) -> Option<&TweakPath> {
        self.path.as_ref()
    }

    /// Returns `true` when a registry is backing this tweak.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.binding.is_registered()
    }
}

impl fmt::Debug for ActionTweak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionTweak")
            .field("path", &self.path)
            .field("has_action", &self.has_action())
            .field("binding", &self.binding)
            .finish()
    }
}
