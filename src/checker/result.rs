use std::path::{Path, PathBuf};

use crate::linter::ViolationReport;

/// Why a file produced no violation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// Line 1 is not an accepted shebang; carries the offending line.
    MalformedShebang { found: String },
    /// The file could not be opened or decoded as text.
    Unreadable { message: String },
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedShebang { found } if found.is_empty() => f.write_str(
                "file has to start with #!/bin/bash or #!/usr/bin/env bash, fix it!",
            ),
            Self::MalformedShebang { found } => write!(
                f,
                "file has to start with #!/bin/bash or #!/usr/bin/env bash, not {found:?}, fix it!"
            ),
            Self::Unreadable { message } => write!(f, "could not read file: {message}"),
        }
    }
}

/// Outcome of checking one script.
///
/// `Passed` and `Failed` carry the full report; `Aborted` files never got
/// past the shebang or could not be read, so they have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed {
        path: PathBuf,
        report: ViolationReport,
    },
    Failed {
        path: PathBuf,
        report: ViolationReport,
    },
    Aborted {
        path: PathBuf,
        reason: AbortReason,
    },
}

impl CheckResult {
    /// Classify a finished report by its error count.
    #[must_use]
    pub fn from_report(path: PathBuf, report: ViolationReport) -> Self {
        if report.is_clean() {
            Self::Passed { path, report }
        } else {
            Self::Failed { path, report }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Passed { path, .. } | Self::Failed { path, .. } | Self::Aborted { path, .. } => {
                path
            }
        }
    }

    #[must_use]
    pub const fn report(&self) -> Option<&ViolationReport> {
        match self {
            Self::Passed { report, .. } | Self::Failed { report, .. } => Some(report),
            Self::Aborted { .. } => None,
        }
    }

    #[must_use]
    pub const fn abort_reason(&self) -> Option<&AbortReason> {
        match self {
            Self::Aborted { reason, .. } => Some(reason),
            Self::Passed { .. } | Self::Failed { .. } => None,
        }
    }

    /// Error count from the report; aborted files count as zero here and
    /// are judged by [`CheckResult::is_passed`] instead.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.report().map_or(0, ViolationReport::error_count)
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    #[must_use]
    pub const fn status_str(&self) -> &'static str {
        match self {
            Self::Passed { .. } => "passed",
            Self::Failed { .. } => "failed",
            Self::Aborted { .. } => "aborted",
        }
    }
}
