//! Command-line surface standing in for an on-device tweak editor.

use std::str::FromStr;

use clap::Parser;
use tweak_gate::TweakPath;

use crate::error::AssignmentError;

/// Greets someone, letting every aspect of the greeting be tweaked.
#[derive(Debug, Default, Parser)]
#[command(name = "hello-tweaks", version, about)]
pub struct CommandLine {
    /// Override a tweak before greeting, e.g. `Greeting/Style/Repeat=3`.
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub overrides: Vec<Assignment>,

    /// Trigger an action tweak after applying overrides.
    #[arg(long = "trigger", value_name = "PATH")]
    pub triggers: Vec<String>,

    /// Print the registered tweaks as JSON instead of greeting.
    #[arg(long)]
    pub list: bool,
}

/// A `PATH=VALUE` override request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Tweak to override.
    pub path: TweakPath,
    /// Unparsed value; the registry reads it according to the tweak's kind.
    pub raw: String,
}

impl FromStr for Assignment {
    type Err = AssignmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (path, raw) = value
            .split_once('=')
            .ok_or_else(|| AssignmentError::MissingSeparator(value.to_owned()))?;
        let path = path.trim();
        if path.is_empty() {
            return Err(AssignmentError::MissingPath(value.to_owned()));
        }
        Ok(Self {
            path: TweakPath::from(path),
            raw: raw.to_owned(),
        })
    }
}
