//! Test helpers shared across crates.
//!
//! This crate provides sentinel thunks that count their evaluations,
//! registries that record or reject what factories send them, and text
//! helpers for behavioural step arguments.

pub mod recording;
pub mod sentinel;
pub mod text;

pub use recording::{RecordedRegistration, RecordingRegistry, Rejected, RejectingRegistry};
pub use sentinel::Sentinel;
