use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bash-guard")]
#[command(author, version, about = "Bash style guard - enforce a house style for bash scripts")]
#[command(long_about = "Checks bash scripts against a fixed house style: \
    indentation, comment spacing, block layout, legacy syntax and required headers.\n\n\
    Exit codes:\n  \
    0 - All files passed\n  \
    1 - Style errors found, or a file could not be checked\n  \
    2 - Configuration or output error")]
pub struct Cli {
    /// Bash scripts to check
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Increase output verbosity (-v shows debug findings, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress report output; only the exit status is meaningful
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,
}

impl Cli {
    /// Install the `env_logger` backend. `RUST_LOG`, when set, wins over
    /// `-v`; `--quiet` leaves logging uninitialised.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let mut builder = env_logger::Builder::from_default_env();
        if let Some(level) = self.level_override(std::env::var_os("RUST_LOG").is_some()) {
            builder.filter_level(level);
        }
        builder.init();
    }

    /// Level to force on the logger, or `None` to leave `RUST_LOG` in charge.
    #[must_use]
    pub const fn level_override(&self, rust_log_set: bool) -> Option<log::LevelFilter> {
        if rust_log_set {
            None
        } else {
            Some(self.log_level())
        }
    }

    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
