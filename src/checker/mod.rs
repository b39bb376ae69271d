mod result;

pub use result::{AbortReason, CheckResult};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, warn};

use crate::error::BashGuardError;
use crate::linter::ScriptLinter;
use crate::{EXIT_STYLE_VIOLATIONS, EXIT_SUCCESS};

/// Runs the linter over files on disk, one at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileChecker {
    linter: ScriptLinter,
}

impl FileChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            linter: ScriptLinter::new(),
        }
    }

    /// Check one script. Never fails: unreadable files and bad shebangs
    /// become [`CheckResult::Aborted`].
    #[must_use]
    pub fn check(&self, path: &Path) -> CheckResult {
        debug!("checking {}", path.display());

        let scanned = File::open(path)
            .map_err(|source| BashGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|file| self.linter.lint_reader(BufReader::new(file)));

        match scanned {
            Ok(report) => {
                debug!(
                    "{}: {} lines, {} errors",
                    path.display(),
                    report.total_lines(),
                    report.error_count()
                );
                CheckResult::from_report(path.to_path_buf(), report)
            }
            Err(BashGuardError::MalformedShebang { found }) => CheckResult::Aborted {
                path: path.to_path_buf(),
                reason: AbortReason::MalformedShebang { found },
            },
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                CheckResult::Aborted {
                    path: path.to_path_buf(),
                    reason: AbortReason::Unreadable {
                        message: error_message(&e),
                    },
                }
            }
        }
    }

    /// Check every path in order; one file's outcome never stops the next.
    #[must_use]
    pub fn check_all<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<CheckResult> {
        paths.iter().map(|path| self.check(path.as_ref())).collect()
    }
}

fn error_message(err: &BashGuardError) -> String {
    match err {
        BashGuardError::FileRead { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

/// Exit status for a run: success only if every file passed.
#[must_use]
pub fn determine_exit_code(results: &[CheckResult]) -> i32 {
    if results.iter().all(CheckResult::is_passed) {
        EXIT_SUCCESS
    } else {
        EXIT_STYLE_VIOLATIONS
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
