use std::fmt::Write;

use serde::Deserialize;

use crate::checker::CheckResult;
use crate::error::Result;

use super::OutputFormatter;
use super::findings::{Level, findings};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[91m";
    pub const GREEN: &str = "\x1b[92m";
    pub const BLUE: &str = "\x1b[94m";
    pub const CYAN: &str = "\x1b[96m";
    pub const RESET: &str = "\x1b[0m";
}

/// Leveled console report, one `[LEVEL] message` line per finding.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// `verbose >= 1` also prints `[DEBUG]` findings.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn level_color(level: Level) -> &'static str {
        match level {
            Level::Error => ansi::RED,
            Level::Warn => ansi::CYAN,
            Level::Info => ansi::GREEN,
            Level::Debug => ansi::BLUE,
        }
    }

    fn colorize_tag(&self, level: Level) -> String {
        if !self.use_colors {
            return level.tag().to_string();
        }
        format!("{}{}{}", Self::level_color(level), level.tag(), ansi::RESET)
    }

    const fn shows(&self, level: Level) -> bool {
        !matches!(level, Level::Debug) || self.verbose >= 1
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let mut output = String::new();

        for result in results {
            for finding in findings(result) {
                if self.shows(finding.level) {
                    let _ = writeln!(output, "{} {finding}", self.colorize_tag(finding.level));
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
