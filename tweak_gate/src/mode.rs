//! Build-mode selection for tweak registration.
//!
//! Whether tweaks are registered is decided once per build by the `tweaks`
//! Cargo feature. Feature unification means every crate linking
//! `tweak_gate` into the same binary observes the same answer.
//!
//! The mode is carried as a type parameter rather than a runtime flag, so the
//! branch in each factory folds away at compile time. [`ActiveMode`] names the
//! mode selected for the current build and is the only mode application code
//! can construct a factory for. Tests reach [`Enabled`] and [`Disabled`]
//! directly through `TweakFactory::with_mode`, which exists only with the
//! `test-util` feature.

mod sealed {
    pub trait Sealed {}
}

/// Compile-time switch deciding whether factories register tweaks.
///
/// This trait is sealed: the only modes are [`Enabled`] and [`Disabled`].
pub trait BuildMode: sealed::Sealed {
    /// `true` when factories evaluate paths and register tweaks.
    const ENABLED: bool;
}

/// Mode in which paths and auxiliary data are evaluated and registered.
#[derive(Debug)]
pub enum Enabled {}

/// Mode in which only default values survive.
#[derive(Debug)]
pub enum Disabled {}

impl sealed::Sealed for Enabled {}
impl sealed::Sealed for Disabled {}

impl BuildMode for Enabled {
    const ENABLED: bool = true;
}

impl BuildMode for Disabled {
    const ENABLED: bool = false;
}

/// Mode selected by the `tweaks` feature for this build.
#[cfg(feature = "tweaks")]
pub type ActiveMode = Enabled;

/// Mode selected by the `tweaks` feature for this build.
#[cfg(not(feature = "tweaks"))]
pub type ActiveMode = Disabled;

/// Whether this build registers tweaks.
///
/// ```rust
/// if tweak_gate::TWEAKS_ENABLED {
///     // Wire up the tweak editor.
/// }
/// ```
pub const TWEAKS_ENABLED: bool = <ActiveMode as BuildMode>::ENABLED;
