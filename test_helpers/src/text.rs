//! Text helpers for behavioural step arguments.

use tweak_gate::TweakValue;

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    for quote in ['"', '\''] {
        if let Some(stripped) = trimmed
            .strip_prefix(quote)
            .and_then(|inner| inner.strip_suffix(quote))
        {
            return stripped;
        }
    }
    trimmed
}

/// Reads a step argument as a literal value.
///
/// Quoted text becomes a string; otherwise booleans, integers and decimals
/// are recognised in that order, falling back to a string.
#[must_use]
pub fn literal(value: &str) -> TweakValue {
    let trimmed = value.trim();
    if unquote(trimmed).len() != trimmed.len() {
        return TweakValue::String(unquote(trimmed).to_owned());
    }
    match trimmed {
        "true" => return TweakValue::Bool(true),
        "false" => return TweakValue::Bool(false),
        _ => {}
    }
    if let Ok(int) = trimmed.parse() {
        return TweakValue::Int(int);
    }
    if let Ok(double) = trimmed.parse() {
        return TweakValue::Double(double);
    }
    TweakValue::String(trimmed.to_owned())
}
