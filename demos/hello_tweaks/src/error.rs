//! Error types for the `hello_tweaks` demo.
//!
//! `HelloTweaksError` wraps registry failures alongside local parsing and
//! output issues so `main` can render concise diagnostics.

use std::io;

use thiserror::Error;
use tweak_gate::RegistryError;

/// Errors raised by the hello tweaks demo.
#[derive(Debug, Error)]
pub enum HelloTweaksError {
    /// The registry rejected a declaration, override or trigger.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The registry listing could not be encoded.
    #[error("failed to encode the tweak listing: {0}")]
    Listing(#[from] serde_json::Error),
    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Problems with a `--set PATH=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// No `=` between path and value.
    #[error("expected PATH=VALUE, got '{0}'")]
    MissingSeparator(String),
    /// Nothing before the `=`.
    #[error("missing tweak path in '{0}'")]
    MissingPath(String),
}

/// Convenient result alias for the demo.
pub type Result<T> = std::result::Result<T, HelloTweaksError>;
