//! Options offered by choice tweaks.

/// One selectable option of a [`crate::ChoiceTweak`]: a title shown in the
/// editing tools and the value the tweak reports when it is selected.
///
/// ```rust
/// use tweak_gate::Choice;
///
/// let choice = Choice::new("Staging", "https://staging.example.com");
/// assert_eq!(choice.title(), "Staging");
/// assert_eq!(*choice.value(), "https://staging.example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    title: String,
    value: T,
}

impl<T> Choice<T> {
    /// Creates a choice.
    #[must_use]
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }

    /// Title shown in the editing tools.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Value reported while this choice is selected.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }
}
