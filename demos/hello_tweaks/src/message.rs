//! Greeting composition and output helpers.

use std::io::{self, Write};

use tweak_gate::MemoryRegistry;

use crate::error::Result;
use crate::tweaks::{AppTweaks, Theme};

/// Builds the greeting from the current tweak values.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use hello_tweaks::message::compose_greeting;
/// use hello_tweaks::tweaks::AppTweaks;
/// use tweak_gate::MemoryRegistry;
///
/// let registry = Arc::new(MemoryRegistry::new());
/// let tweaks = AppTweaks::declare(&registry).expect("declarations succeed");
/// assert_eq!(compose_greeting(&tweaks), "Hello, World! (volume 80%)");
/// ```
#[must_use]
pub fn compose_greeting(tweaks: &AppTweaks) -> String {
    let salutation = tweaks.salutation.current_value();
    let repeat = repeat_count(tweaks.repeat.current_value());
    let words = vec![salutation.as_str(); repeat].join(" ");
    let mut line = format!("{words}, {}!", tweaks.recipient.current_value());
    if tweaks.shout.current_value() {
        line = line.to_uppercase();
    }
    let line = match tweaks.theme.current_value() {
        Theme::Light => line,
        Theme::Dark => format!("[{line}]"),
        Theme::HighContrast => format!("*** {line} ***"),
    };
    format!("{line} (volume {}%)", volume_percent(tweaks.volume.current_value()))
}

/// Upper bound on how often the salutation is repeated.
pub const MAX_REPEAT: usize = 10;

fn repeat_count(requested: i64) -> usize {
    usize::try_from(requested).map_or(1, |count| count.clamp(1, MAX_REPEAT))
}

fn volume_percent(volume: f64) -> u8 {
    let clamped = volume.clamp(0.0, 1.0);
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_arithmetic,
        reason = "value is clamped to 0..=100 before the cast"
    )]
    let percent = (clamped * 100.0).round() as u8;
    percent
}

/// Encodes the registry contents as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialisation fails.
pub fn compose_listing(registry: &MemoryRegistry) -> Result<String> {
    Ok(serde_json::to_string_pretty(&registry.entries())?)
}

/// Writes `text` and a trailing newline to standard output.
///
/// # Errors
///
/// Returns an error when writing to standard output fails.
pub fn print_line(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
