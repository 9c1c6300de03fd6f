//! Type-erased values exchanged with registries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kinds of tweak a registry can be asked to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweakKind {
    /// On/off switch.
    Bool,
    /// Free-form text.
    String,
    /// Signed integer.
    Int,
    /// Floating-point number.
    Double,
    /// One value out of a fixed list of choices.
    Choice,
    /// Callback run on demand; holds no value.
    Action,
}

impl TweakKind {
    /// Lower-case name used in logs and listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "string",
            Self::Int => "int",
            Self::Double => "double",
            Self::Choice => "choice",
            Self::Action => "action",
        }
    }
}

impl fmt::Display for TweakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tweak value without its static type.
///
/// Choice tweaks are represented by the index of the selected entry in the
/// list passed at registration, which keeps registries independent of the
/// caller's choice type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TweakValue {
    /// Value of a [`TweakKind::Bool`] tweak.
    Bool(bool),
    /// Value of a [`TweakKind::String`] tweak.
    String(String),
    /// Value of a [`TweakKind::Int`] tweak.
    Int(i64),
    /// Value of a [`TweakKind::Double`] tweak.
    Double(f64),
    /// Index of the selected choice of a [`TweakKind::Choice`] tweak.
    Choice(usize),
}

impl TweakValue {
    /// Kind of tweak able to hold this value.
    #[must_use]
    pub const fn kind(&self) -> TweakKind {
        match self {
            Self::Bool(_) => TweakKind::Bool,
            Self::String(_) => TweakKind::String,
            Self::Int(_) => TweakKind::Int,
            Self::Double(_) => TweakKind::Double,
            Self::Choice(_) => TweakKind::Choice,
        }
    }
}

impl fmt::Display for TweakValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::Choice(index) => write!(f, "#{index}"),
        }
    }
}

/// Plain value types backing [`crate::Tweak`].
///
/// Implemented for `bool`, `String`, `i64` and `f64`, the scalar kinds a
/// registry understands.
pub trait TweakScalar: Clone + Send + Sync + 'static {
    /// Kind announced to the registry.
    const KIND: TweakKind;

    /// Converts into the type-erased form.
    fn into_value(self) -> TweakValue;

    /// Extracts a value of this type, returning `None` on a kind mismatch.
    fn from_value(value: &TweakValue) -> Option<Self>;
}

impl TweakScalar for bool {
    const KIND: TweakKind = TweakKind::Bool;

    fn into_value(self) -> TweakValue {
        TweakValue::Bool(self)
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl TweakScalar for String {
    const KIND: TweakKind = TweakKind::String;

    fn into_value(self) -> TweakValue {
        TweakValue::String(self)
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::String(value) => Some(value.clone()),
            _ => None,
        }
    }
}

impl TweakScalar for i64 {
    const KIND: TweakKind = TweakKind::Int;

    fn into_value(self) -> TweakValue {
        TweakValue::Int(self)
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl TweakScalar for f64 {
    const KIND: TweakKind = TweakKind::Double;

    fn into_value(self) -> TweakValue {
        TweakValue::Double(self)
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Double(value) => Some(*value),
            _ => None,
        }
    }
}
