//! Closures that record whether, and how often, they ran.
//!
//! Factories promise never to evaluate path or choice closures when tweaks
//! are disabled. A [`Sentinel`] hands out closures that bump a shared counter
//! so tests can assert on that promise.
//!
//! # Examples
//!
//! ```
//! use tweak_gate_test_helpers::Sentinel;
//!
//! let sentinel = Sentinel::new();
//! let thunk = sentinel.path("Demo/Flag");
//! assert!(sentinel.is_untouched());
//! let _path = thunk();
//! assert_eq!(sentinel.hits(), 1);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tweak_gate::{Choice, TweakPath};

/// Shared evaluation counter.
#[derive(Debug, Clone, Default)]
pub struct Sentinel {
    hits: Arc<AtomicUsize>,
}

impl Sentinel {
    /// Creates a sentinel that has not been hit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times any closure from this sentinel ran.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Returns `true` while no closure from this sentinel has run.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.hits() == 0
    }

    /// Path closure recording its evaluation.
    pub fn path(&self, raw: &str) -> impl FnOnce() -> TweakPath + use<> {
        let hits = Arc::clone(&self.hits);
        let path = raw.to_owned();
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
            TweakPath::from(path)
        }
    }

    /// Choice-list closure recording its evaluation.
    pub fn choices<T>(&self, choices: Vec<Choice<T>>) -> impl FnOnce() -> Vec<Choice<T>> + use<T> {
        let hits = Arc::clone(&self.hits);
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
            choices
        }
    }

    /// Callback recording each run, suitable for action tweaks.
    pub fn action(&self) -> impl Fn() + Send + Sync + 'static + use<> {
        let hits = Arc::clone(&self.hits);
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    }
}
