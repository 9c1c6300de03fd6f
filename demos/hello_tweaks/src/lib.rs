//! Library facade for the `hello_tweaks` demo so integration tests can reuse
//! the tweak declarations and rendering helpers.

pub mod cli;
pub mod error;
pub mod message;
pub mod tweaks;
