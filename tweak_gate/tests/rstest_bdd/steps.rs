//! Step definitions for the gated factory scenarios.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{literal, unquote};
use tweak_gate::{Disabled, Enabled, MemoryRegistry, TweakFactory, TweakPath};

use crate::fixtures::GateContext;

/// Runs the closure matching the scenario's build mode.
fn with_factory<T>(
    gate_context: &GateContext,
    enabled: impl FnOnce(&TweakFactory<'_, MemoryRegistry, Enabled>) -> T,
    disabled: impl FnOnce(&TweakFactory<'_, MemoryRegistry, Disabled>) -> T,
) -> T {
    let registry = gate_context.registry();
    if gate_context.is_enabled() {
        enabled(&TweakFactory::with_mode(&*registry))
    } else {
        disabled(&TweakFactory::with_mode(&*registry))
    }
}

fn declare_path(gate_context: &GateContext, path: &str) -> impl FnOnce() -> TweakPath + use<> {
    gate_context.path_sentinel().path(unquote(path))
}

#[given("tweaks are enabled")]
fn tweaks_enabled(gate_context: &GateContext) {
    gate_context.enabled.set(true);
}

#[given("tweaks are disabled")]
fn tweaks_disabled(gate_context: &GateContext) {
    gate_context.enabled.set(false);
}

#[when("a boolean tweak {path} is declared with default {default:bool}")]
fn declare_bool(gate_context: &GateContext, path: String, default: bool) -> Result<()> {
    let flag = with_factory(
        gate_context,
        |factory| factory.bool_tweak(declare_path(gate_context, &path), default),
        |factory| factory.bool_tweak(declare_path(gate_context, &path), default),
    )?;
    gate_context.flag.set(flag);
    Ok(())
}

#[when("an integer tweak {path} is declared with default {default:i64}")]
fn declare_int(gate_context: &GateContext, path: String, default: i64) -> Result<()> {
    let count = with_factory(
        gate_context,
        |factory| factory.int_tweak(declare_path(gate_context, &path), default),
        |factory| factory.int_tweak(declare_path(gate_context, &path), default),
    )?;
    gate_context.count.set(count);
    Ok(())
}

#[when("an action tweak {path} is declared")]
fn declare_action(gate_context: &GateContext, path: String) -> Result<()> {
    let callback = gate_context.action_sentinel();
    let action = with_factory(
        gate_context,
        |factory| factory.action_tweak(declare_path(gate_context, &path), callback.action()),
        |factory| factory.action_tweak(declare_path(gate_context, &path), callback.action()),
    )?;
    gate_context.action.set(action);
    Ok(())
}

#[when("{path} is overridden with {value}")]
fn override_value(gate_context: &GateContext, path: String, value: String) -> Result<()> {
    gate_context
        .registry()
        .set_override(&TweakPath::from(unquote(&path)), literal(&value))?;
    Ok(())
}

#[when("{path} is triggered")]
fn trigger(gate_context: &GateContext, path: String) -> Result<()> {
    gate_context
        .registry()
        .trigger(&TweakPath::from(unquote(&path)))?;
    Ok(())
}

#[then("the boolean tweak reads {expected:bool}")]
fn boolean_reads(gate_context: &GateContext, expected: bool) -> Result<()> {
    let actual = gate_context
        .flag
        .with_ref(|flag| flag.current_value())
        .ok_or_else(|| anyhow!("no boolean tweak was declared"))?;
    ensure!(actual == expected, "expected {expected}, got {actual}");
    Ok(())
}

#[then("the integer tweak reads {expected:i64}")]
fn integer_reads(gate_context: &GateContext, expected: i64) -> Result<()> {
    let actual = gate_context
        .count
        .with_ref(|count| count.current_value())
        .ok_or_else(|| anyhow!("no integer tweak was declared"))?;
    ensure!(actual == expected, "expected {expected}, got {actual}");
    Ok(())
}

#[then("the path thunk ran {expected:usize} times")]
fn path_thunk_ran(gate_context: &GateContext, expected: usize) -> Result<()> {
    let hits = gate_context.path_sentinel().hits();
    ensure!(hits == expected, "path thunk ran {hits} times, expected {expected}");
    Ok(())
}

#[then("the action callback ran {expected:usize} times")]
fn action_ran(gate_context: &GateContext, expected: usize) -> Result<()> {
    let hits = gate_context.action_sentinel().hits();
    ensure!(hits == expected, "callback ran {hits} times, expected {expected}");
    Ok(())
}

#[then("the registry holds {expected:usize} tweaks")]
fn registry_holds(gate_context: &GateContext, expected: usize) -> Result<()> {
    let registry = gate_context.registry();
    ensure!(
        registry.len() == expected,
        "registry holds {} tweaks, expected {expected}",
        registry.len()
    );
    Ok(())
}

