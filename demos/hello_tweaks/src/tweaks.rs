//! Tweaks declared by the demo.
//!
//! In a build without the `tweaks` feature every declaration below collapses
//! to its default and none of the paths or choice lists are constructed.

use std::fmt;
use std::sync::{Arc, Weak};

use tweak_gate::{
    ActionTweak, BoolTweak, ChoiceTweak, DoubleTweak, IntTweak, MemoryRegistry, RegistryError,
    StringTweak, tweak,
};

/// Colour scheme applied to the greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Plain output.
    Light,
    /// Output wrapped in brackets.
    Dark,
    /// Output wrapped in asterisks.
    HighContrast,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
        })
    }
}

/// Every tweak the demo reads while composing its greeting.
#[derive(Debug)]
pub struct AppTweaks {
    /// Word used to greet.
    pub salutation: StringTweak,
    /// Who is greeted.
    pub recipient: StringTweak,
    /// Upper-cases the greeting when on.
    pub shout: BoolTweak,
    /// How many times the salutation is repeated.
    pub repeat: IntTweak,
    /// Volume reported alongside the greeting, from 0 to 1.
    pub volume: DoubleTweak,
    /// Decoration around the greeting.
    pub theme: ChoiceTweak<Theme>,
    /// Clears every override in the registry.
    pub reset: ActionTweak,
}

impl AppTweaks {
    /// Declares the demo's tweaks in `registry`.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if the registry rejects a declaration.
    pub fn declare(registry: &Arc<MemoryRegistry>) -> Result<Self, RegistryError> {
        let registry_ref: &MemoryRegistry = registry;
        Ok(Self {
            salutation: tweak!(string, registry_ref, "Greeting/Text/Salutation", "Hello")?,
            recipient: tweak!(string, registry_ref, "Greeting/Text/Recipient", "World")?,
            shout: tweak!(bool, registry_ref, "Greeting/Style/Shout", false)?,
            repeat: tweak!(int, registry_ref, "Greeting/Style/Repeat", 1)?,
            volume: tweak!(double, registry_ref, "Audio/Output/Volume", 0.8)?,
            theme: tweak!(choice, registry_ref, "Greeting/Style/Theme", Theme::Light, [
                "Light" => Theme::Light,
                "Dark" => Theme::Dark,
                "High contrast" => Theme::HighContrast,
            ])?,
            reset: tweak!(
                action,
                registry_ref,
                "Debug/Registry/Reset overrides",
                reset_overrides(Arc::downgrade(registry))
            )?,
        })
    }
}

fn reset_overrides(registry: Weak<MemoryRegistry>) -> impl Fn() + Send + Sync + 'static {
    move || {
        if let Some(registry) = registry.upgrade() {
            tracing::info!("clearing tweak overrides");
            registry.clear_all();
        }
    }
}
