//! Build-mode gated tweak declarations.
//!
//! A tweak is a developer-adjustable value with a compile-time default. This
//! crate provides one factory per value kind that either registers the tweak
//! with a [`TweakRegistry`] or, when the `tweaks` feature is off, skips the
//! registration path entirely and hands back a handle that only knows its
//! default. Paths and choice lists are passed as closures so release builds
//! never construct them.
//!
//! ```rust
//! use tweak_gate::{MemoryRegistry, TweakPath, make_bool_tweak};
//!
//! # fn main() -> Result<(), tweak_gate::RegistryError> {
//! let registry = MemoryRegistry::new();
//! let mock_devices = make_bool_tweak(
//!     &registry,
//!     || TweakPath::new(["Core", "Misc", "Always mock devices"]),
//!     true,
//! )?;
//! assert!(mock_devices.current_value());
//! # Ok(())
//! # }
//! ```

mod choice;
pub mod factory;
mod handle;
mod macros;
pub mod memory;
pub mod mode;
mod path;
pub mod registry;
mod value;

pub use choice::Choice;
pub use factory::{
    TweakFactory, make_action_tweak, make_bool_tweak, make_choice_tweak, make_double_tweak,
    make_int_tweak, make_string_tweak,
};
pub use handle::{ActionTweak, BoolTweak, ChoiceTweak, DoubleTweak, IntTweak, StringTweak, Tweak};
pub use memory::{EntrySnapshot, MemoryRegistry, RegistryError};
pub use mode::{ActiveMode, BuildMode, Disabled, Enabled, TWEAKS_ENABLED};
pub use path::TweakPath;
pub use registry::{Action, Auxiliary, Binding, OverrideSource, Registration, TweakRegistry};
pub use value::{TweakKind, TweakScalar, TweakValue};

