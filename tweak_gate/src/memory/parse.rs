//! Parsing textual overrides, as typed into a debug console or passed on a
//! command line.

use crate::value::{TweakKind, TweakValue};

/// Reads `raw` as a value of `kind`.
///
/// Choice tweaks accept a choice title (case-insensitively) or an index.
/// Range checks on indices are left to the caller.
pub(super) fn parse_value(kind: TweakKind, titles: &[String], raw: &str) -> Option<TweakValue> {
    let trimmed = raw.trim();
    match kind {
        TweakKind::Bool => parse_bool(trimmed).map(TweakValue::Bool),
        TweakKind::String => Some(TweakValue::String(raw.to_owned())),
        TweakKind::Int => trimmed.parse().ok().map(TweakValue::Int),
        TweakKind::Double => trimmed.parse().ok().map(TweakValue::Double),
        TweakKind::Choice => titles
            .iter()
            .position(|title| title.eq_ignore_ascii_case(trimmed))
            .or_else(|| trimmed.parse().ok())
            .map(TweakValue::Choice),
        TweakKind::Action => None,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
