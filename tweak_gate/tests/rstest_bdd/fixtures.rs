//! Shared fixtures for the behavioural scenarios.

use std::sync::Arc;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::Sentinel;
use tweak_gate::{ActionTweak, BoolTweak, IntTweak, MemoryRegistry};

/// State shared between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct GateContext {
    /// Whether declarations use the enabled branch.
    pub enabled: Slot<bool>,
    /// Registry receiving declarations.
    pub registry: Slot<Arc<MemoryRegistry>>,
    /// Counts path evaluations.
    pub path_sentinel: Slot<Sentinel>,
    /// Counts action callback runs.
    pub action_sentinel: Slot<Sentinel>,
    /// Last declared boolean tweak.
    pub flag: Slot<BoolTweak>,
    /// Last declared integer tweak.
    pub count: Slot<IntTweak>,
    /// Last declared action tweak.
    pub action: Slot<ActionTweak>,
}

impl GateContext {
    /// Registry for the scenario, created on first use.
    pub fn registry(&self) -> Arc<MemoryRegistry> {
        if let Some(registry) = self.registry.with_ref(Arc::clone) {
            return registry;
        }
        let registry = Arc::new(MemoryRegistry::new());
        self.registry.set(Arc::clone(&registry));
        registry
    }

    /// Path sentinel for the scenario, created on first use.
    pub fn path_sentinel(&self) -> Sentinel {
        Self::sentinel(&self.path_sentinel)
    }

    /// Action sentinel for the scenario, created on first use.
    pub fn action_sentinel(&self) -> Sentinel {
        Self::sentinel(&self.action_sentinel)
    }

    /// Whether tweaks were switched on by a `Given` step.
    pub fn is_enabled(&self) -> bool {
        self.enabled.with_ref(|enabled| *enabled).unwrap_or(false)
    }

    fn sentinel(slot: &Slot<Sentinel>) -> Sentinel {
        if let Some(sentinel) = slot.with_ref(Sentinel::clone) {
            return sentinel;
        }
        let sentinel = Sentinel::new();
        slot.set(sentinel.clone());
        sentinel
    }
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn gate_context() -> GateContext {
    GateContext::default()
}
