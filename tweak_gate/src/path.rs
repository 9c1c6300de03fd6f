//! Hierarchical identifiers locating a tweak in the editing tools.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a tweak appears in the editing tools, e.g. `Core/Misc/Mock devices`.
///
/// Paths are opaque to the factories: construction performs no validation,
/// leaving that to the registry receiving them.
///
/// # Examples
///
/// ```rust
/// use tweak_gate::TweakPath;
///
/// let path = TweakPath::new(["Core", "Misc", "Always mock devices"]);
/// assert_eq!(path.category(), Some("Core"));
/// assert_eq!(path.subcategory(), Some("Misc"));
/// assert_eq!(path.name(), Some("Always mock devices"));
/// assert_eq!(path, TweakPath::from("Core/Misc/Always mock devices"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TweakPath {
    segments: Vec<String>,
}

impl TweakPath {
    /// Separator used by [`fmt::Display`] and [`From<&str>`].
    pub const SEPARATOR: char = '/';

    /// Builds a path from its segments, outermost first.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Segments of the path, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Top-level grouping, the first segment.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Grouping inside the category.
    ///
    /// Only paths with at least three segments have one; in a two-segment
    /// path the second segment is the name.
    #[must_use]
    pub fn subcategory(&self) -> Option<&str> {
        if self.segments.len() < 3 {
            return None;
        }
        self.segments.get(1).map(String::as_str)
    }

    /// Display name of the tweak, the last segment.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns `true` when the path has no segments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for TweakPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl From<&str> for TweakPath {
    /// Splits on `/`. Empty segments are kept so the registry can reject them.
    fn from(value: &str) -> Self {
        Self::new(value.split(Self::SEPARATOR))
    }
}

impl From<String> for TweakPath {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
