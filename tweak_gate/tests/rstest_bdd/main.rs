//! `rstest-bdd` behavioural suite for `tweak_gate`.
//!
//! The modules defined alongside this entrypoint register the shared fixture,
//! step implementations, and the scenario bindings so the feature files run
//! under `cargo test`.

mod fixtures;
mod scenarios;
mod steps;
