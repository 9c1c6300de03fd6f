//! Errors reported by [`super::MemoryRegistry`].

use thiserror::Error;

use crate::path::TweakPath;
use crate::value::TweakKind;

/// Errors raised while registering or editing tweaks in a
/// [`super::MemoryRegistry`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The path has no segments.
    #[error("tweak path must not be empty")]
    EmptyPath,

    /// One of the path's segments is blank.
    #[error("tweak path '{path}' contains an empty segment")]
    EmptySegment {
        /// Offending path.
        path: TweakPath,
    },

    /// The path is already registered with another kind, or an override of
    /// the wrong kind was supplied.
    #[error("tweak '{path}' holds {registered} values, not {requested}")]
    KindMismatch {
        /// Path of the tweak.
        path: TweakPath,
        /// Kind the path was first registered with.
        registered: TweakKind,
        /// Kind of the rejected registration or value.
        requested: TweakKind,
    },

    /// The path is already registered as a choice tweak offering other
    /// choices.
    #[error("tweak '{path}' already offers {registered:?}, not {requested:?}")]
    ChoicesMismatch {
        /// Path of the choice tweak.
        path: TweakPath,
        /// Titles of the first registration.
        registered: Vec<String>,
        /// Titles of the rejected registration.
        requested: Vec<String>,
    },

    /// Nothing is registered under the path.
    #[error("no tweak registered at '{path}'")]
    UnknownPath {
        /// Path that was looked up.
        path: TweakPath,
    },

    /// A choice override pointed past the end of the choice list.
    #[error("choice {index} is out of range for '{path}' ({available} choices)")]
    ChoiceOutOfRange {
        /// Path of the choice tweak.
        path: TweakPath,
        /// Requested index.
        index: usize,
        /// Number of registered choices.
        available: usize,
    },

    /// Actions hold no value to override.
    #[error("tweak '{path}' is an action and holds no value")]
    NotEditable {
        /// Path of the action tweak.
        path: TweakPath,
    },

    /// Only action tweaks can be triggered.
    #[error("tweak '{path}' is not an action")]
    NotAnAction {
        /// Path of the tweak.
        path: TweakPath,
    },

    /// Text supplied as an override could not be read as the tweak's kind.
    #[error("cannot read '{raw}' as a {kind} value for '{path}'")]
    InvalidValue {
        /// Path of the tweak.
        path: TweakPath,
        /// Kind the text was parsed as.
        kind: TweakKind,
        /// Rejected text.
        raw: String,
    },
}
