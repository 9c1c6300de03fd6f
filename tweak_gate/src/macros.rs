//! Declaration shorthand deferring path and choice construction.

/// Declares a tweak for the active build mode.
///
/// The path (and the choice list of a choice tweak) are written as plain
/// expressions and wrapped in closures, so they are only evaluated when the
/// `tweaks` feature is on. Paths may be anything [`crate::TweakPath`]
/// converts from, including a `TweakPath` itself.
///
/// ```rust
/// use tweak_gate::{MemoryRegistry, tweak};
///
/// # fn main() -> Result<(), tweak_gate::RegistryError> {
/// let registry = MemoryRegistry::new();
/// let verbose = tweak!(bool, &registry, "Core/Logging/Verbose", false)?;
/// let greeting = tweak!(string, &registry, "Core/Text/Greeting", "Hello")?;
/// let retries = tweak!(int, &registry, "Network/Retries", 3)?;
/// let scale = tweak!(double, &registry, "UI/Scale", 1.0)?;
/// let backend = tweak!(choice, &registry, "Network/Backend", "prod", [
///     "Production" => "prod",
///     "Staging" => "staging",
/// ])?;
/// let reset = tweak!(action, &registry, "Core/Reset", || {})?;
///
/// assert!(!verbose.current_value());
/// assert_eq!(greeting.current_value(), "Hello");
/// assert_eq!(retries.current_value(), 3);
/// assert_eq!(scale.current_value(), 1.0);
/// assert_eq!(backend.current_value(), "prod");
/// reset.invoke();
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! tweak {
    (bool, $registry:expr, $path:expr, $default:expr $(,)?) => {
        $crate::make_bool_tweak($registry, || $crate::TweakPath::from($path), $default)
    };
    (string, $registry:expr, $path:expr, $default:expr $(,)?) => {
        $crate::make_string_tweak($registry, || $crate::TweakPath::from($path), $default)
    };
    (int, $registry:expr, $path:expr, $default:expr $(,)?) => {
        $crate::make_int_tweak($registry, || $crate::TweakPath::from($path), $default)
    };
    (double, $registry:expr, $path:expr, $default:expr $(,)?) => {
        $crate::make_double_tweak($registry, || $crate::TweakPath::from($path), $default)
    };
    (choice, $registry:expr, $path:expr, $default:expr, [$($title:expr => $value:expr),* $(,)?] $(,)?) => {
        $crate::make_choice_tweak(
            $registry,
            || $crate::TweakPath::from($path),
            $default,
            || ::std::vec![$($crate::Choice::new($title, $value)),*],
        )
    };
    (action, $registry:expr, $path:expr, $action:expr $(,)?) => {
        $crate::make_action_tweak($registry, || $crate::TweakPath::from($path), $action)
    };
}
