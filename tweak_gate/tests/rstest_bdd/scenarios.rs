//! Binds the feature files to the step registry.

use crate::fixtures::{GateContext, gate_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/tweak_gate.feature",
    fixtures = [gate_context: GateContext]
);
