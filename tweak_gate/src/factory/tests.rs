//! Unit tests for the factory branches.

use std::cell::Cell;

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};

use super::*;
use crate::memory::MemoryRegistry;
use crate::mode::{Disabled, Enabled};

#[fixture]
fn registry() -> MemoryRegistry {
    MemoryRegistry::new()
}

#[rstest]
fn disabled_factory_skips_path_and_registry(registry: MemoryRegistry) -> Result<()> {
    let calls = Cell::new(0_u32);
    let factory = TweakFactory::<_, Disabled>::with_mode(&registry);
    let flag = factory.bool_tweak(
        || {
            calls.set(calls.get() + 1);
            TweakPath::from("Demo/Flag")
        },
        true,
    )?;

    ensure!(flag.current_value(), "default should survive");
    ensure!(calls.get() == 0, "path thunk ran {} times", calls.get());
    ensure!(flag.path().is_none(), "disabled handles carry no path");
    ensure!(registry.is_empty(), "nothing should be registered");
    Ok(())
}

#[rstest]
fn enabled_factory_evaluates_path_once(registry: MemoryRegistry) -> Result<()> {
    let calls = Cell::new(0_u32);
    let factory = TweakFactory::<_, Enabled>::with_mode(&registry);
    let count = factory.int_tweak(
        || {
            calls.set(calls.get() + 1);
            TweakPath::from("Demo/Count")
        },
        5,
    )?;

    ensure!(calls.get() == 1, "path thunk ran {} times", calls.get());
    ensure!(count.current_value() == 5, "no override means default");
    ensure!(count.is_registered(), "enabled handles are bound");
    ensure!(registry.contains(&TweakPath::from("Demo/Count")), "path not recorded");
    Ok(())
}

#[rstest]
fn choice_default_index_is_forwarded(registry: MemoryRegistry) -> Result<()> {
    let factory = TweakFactory::<_, Enabled>::with_mode(&registry);
    factory.choice_tweak(
        || TweakPath::from("Demo/Level"),
        3_u8,
        || vec![Choice::new("Low", 1), Choice::new("High", 3)],
    )?;
    factory.choice_tweak(
        || TweakPath::from("Demo/Other"),
        9_u8,
        || vec![Choice::new("Low", 1)],
    )?;

    let level = registry.entry(&TweakPath::from("Demo/Level"));
    let other = registry.entry(&TweakPath::from("Demo/Other"));
    ensure!(
        level.and_then(|e| e.default) == Some(TweakValue::Choice(1)),
        "default index should point at the matching choice"
    );
    ensure!(
        other.and_then(|e| e.default).is_none(),
        "defaults outside the list have no index"
    );
    Ok(())
}

#[rstest]
fn active_mode_matches_feature(registry: MemoryRegistry) -> Result<()> {
    let flag = make_bool_tweak(&registry, || TweakPath::from("Demo/Flag"), false)?;
    ensure!(
        flag.is_registered() == cfg!(feature = "tweaks"),
        "free functions must follow the tweaks feature"
    );
    Ok(())
}

#[rstest]
fn plain_constructor_follows_the_build_mode(registry: MemoryRegistry) -> Result<()> {
    let calls = Cell::new(0_u32);
    let factory: TweakFactory<'_, MemoryRegistry, ActiveMode> = TweakFactory::new(&registry);
    let flag = factory.bool_tweak(
        || {
            calls.set(calls.get() + 1);
            TweakPath::from("Debug/Only")
        },
        true,
    )?;

    ensure!(
        calls.get() == u32::from(<ActiveMode as BuildMode>::ENABLED),
        "path thunk ran {} times",
        calls.get()
    );
    ensure!(
        flag.is_registered() == cfg!(feature = "tweaks"),
        "registration must follow the feature"
    );
    ensure!(registry.len() == usize::from(cfg!(feature = "tweaks")), "unexpected registry size");
    Ok(())
}
