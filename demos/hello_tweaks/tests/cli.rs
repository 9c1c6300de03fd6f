//! End-to-end tests driving the compiled `hello_tweaks` binary.

use anyhow::{Result, ensure};
use assert_cmd::Command;
use rstest::rstest;
use tweak_gate::TWEAKS_ENABLED;

fn run(args: &[&str]) -> Result<std::process::Output> {
    #[expect(deprecated, reason = "cargo_bin is the standard assert_cmd API")]
    let mut cmd = Command::cargo_bin("hello_tweaks")?;
    cmd.env_remove("HELLO_TWEAKS_LOG");
    cmd.env("RUST_BACKTRACE", "0");
    cmd.args(args);
    Ok(cmd.output()?)
}

fn stdout_of(args: &[&str]) -> Result<String> {
    let output = run(args)?;
    ensure!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8(output.stdout)?.trim_end().to_owned())
}

#[test]
fn greets_with_defaults() -> Result<()> {
    let stdout = stdout_of(&[])?;
    ensure!(stdout == "Hello, World! (volume 80%)", "unexpected greeting: {stdout}");
    Ok(())
}

#[rstest]
#[case::shout(&["--set", "Greeting/Style/Shout=on"], "HELLO, WORLD! (volume 80%)")]
#[case::volume(&["--set", "Audio/Output/Volume=0.25"], "Hello, World! (volume 25%)")]
#[case::huge_repeat(
    &["--set", "Greeting/Style/Repeat=9223372036854775807"],
    "Hello Hello Hello Hello Hello Hello Hello Hello Hello Hello, World! (volume 80%)"
)]
#[case::reset(
    &["--set", "Greeting/Style/Repeat=3", "--trigger", "Debug/Registry/Reset overrides"],
    "Hello, World! (volume 80%)"
)]
fn overrides_apply_when_tweaks_are_compiled_in(
    #[case] args: &[&str],
    #[case] expected: &str,
) -> Result<()> {
    if !TWEAKS_ENABLED {
        return Ok(());
    }
    let stdout = stdout_of(args)?;
    ensure!(stdout == expected, "unexpected greeting: {stdout}");
    Ok(())
}

#[test]
fn unknown_paths_fail() -> Result<()> {
    let output = run(&["--set", "Nope/Missing=1"])?;
    ensure!(!output.status.success(), "unknown tweak should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        stderr.contains("no tweak registered at 'Nope/Missing'"),
        "unexpected stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn listing_reports_every_declaration() -> Result<()> {
    let stdout = stdout_of(&["--list"])?;
    let listing: serde_json::Value = serde_json::from_str(&stdout)?;
    let count = listing.as_array().map_or(0, Vec::len);
    let expected = if TWEAKS_ENABLED { 7 } else { 0 };
    ensure!(count == expected, "expected {expected} entries, got {count}");
    Ok(())
}
