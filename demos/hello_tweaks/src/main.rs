//! Hello Tweaks entry-point: declare tweaks, apply command-line edits, greet.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tweak_gate::{MemoryRegistry, TweakPath};

use hello_tweaks::cli::CommandLine;
use hello_tweaks::error::Result;
use hello_tweaks::message::{compose_greeting, compose_listing, print_line};
use hello_tweaks::tweaks::AppTweaks;

const LOG_ENV: &str = "HELLO_TWEAKS_LOG";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = CommandLine::parse();
    run(&cli).map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &CommandLine) -> Result<()> {
    let registry = Arc::new(MemoryRegistry::new());
    let tweaks = AppTweaks::declare(&registry)?;
    tracing::debug!(
        enabled = tweak_gate::TWEAKS_ENABLED,
        registered = registry.len(),
        "tweaks declared"
    );

    for assignment in &cli.overrides {
        registry.set_override_str(&assignment.path, &assignment.raw)?;
    }
    for trigger in &cli.triggers {
        registry.trigger(&TweakPath::from(trigger.as_str()))?;
    }

    if cli.list {
        print_line(&compose_listing(&registry)?)
    } else {
        print_line(&compose_greeting(&tweaks))
    }
}
