use serde::Deserialize;

use crate::output::{ColorMode, OutputFormat};

/// Contents of `.bash-guard.toml`.
///
/// Only presentation defaults live here; the rule set is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// auto | always | never
    #[serde(default)]
    pub color: ColorMode,

    /// text | json
    #[serde(default)]
    pub format: OutputFormat,

    /// Default verbosity, raised further by `-v` on the command line.
    #[serde(default)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
