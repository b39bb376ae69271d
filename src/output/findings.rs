//! Turns check results into leveled, human-readable findings.

use std::fmt;

use serde::Serialize;

use crate::checker::CheckResult;
use crate::linter::{BlockKind, FileIssue, RuleCategory, ViolationReport};

/// Severity tag of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    /// Fixed-width tag, e.g. `[WARN ]`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN ]",
            Self::Info => "[INFO ]",
            Self::Debug => "[DEBUG]",
        }
    }
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: Level,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<usize>,
}

impl Finding {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            lines: Vec::new(),
        }
    }

    fn with_lines(level: Level, message: impl Into<String>, lines: &[usize]) -> Self {
        Self {
            level,
            message: message.into(),
            lines: lines.to_vec(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}, lines: {:?}", self.message, self.lines)
        }
    }
}

const fn issue_finding(issue: FileIssue) -> (Level, &'static str) {
    match issue {
        FileIssue::MissingProject => (Level::Error, "file needs a project description"),
        FileIssue::MissingCopyright => (Level::Error, "file needs a copyright description"),
        FileIssue::MissingUsage => (Level::Warn, "file should have a usage function"),
        // Reported as a warning, but still counted.
        FileIssue::MissingMainDef => (Level::Warn, "file should have a main method"),
        FileIssue::MissingMainCall => (
            Level::Error,
            "file needs a correct main function call: e.g. main \"$@\"",
        ),
        FileIssue::MissingAuthor => (Level::Error, "file needs an author"),
    }
}

/// Message naming the convention a category enforces.
#[must_use]
pub const fn category_message(category: RuleCategory) -> &'static str {
    match category {
        RuleCategory::Tabs => "indentation with tabs detected, use multiples of 4 spaces",
        RuleCategory::FourSpaces => "indentation has to be a multiple of 4 spaces",
        RuleCategory::CommentSpacing => {
            "comment needs a space after the hash, not '#Comment' but '# Comment'"
        }
        RuleCategory::If => "if statement not correct, should be 'if [ .. ]; then'",
        RuleCategory::Case => "case statement not correct, should be 'case ... in'",
        RuleCategory::For => "for statement not correct, should be 'for .. in ..; do'",
        RuleCategory::While => "while statement not correct, should be 'while [ .. ]; do'",
        RuleCategory::BashSubcall => "don't use `prog`, better use $(prog)",
        RuleCategory::FuncDef => "invalid function definition, should be 'functionname() {'",
    }
}

fn unclosed_message(kind: BlockKind) -> String {
    format!(
        "`{}` block opened but never closed with `{}`",
        kind.keyword(),
        kind.closer()
    )
}

fn report_findings(report: &ViolationReport, out: &mut Vec<Finding>) {
    for issue in report.facts().issues() {
        let (level, message) = issue_finding(issue);
        out.push(Finding::new(level, message));
    }

    for category in RuleCategory::ALL {
        let lines = report.lines(category);
        if !lines.is_empty() {
            out.push(Finding::with_lines(
                Level::Error,
                category_message(category),
                lines,
            ));
        }
    }

    for &kind in report.unclosed_blocks() {
        out.push(Finding::new(Level::Debug, unclosed_message(kind)));
    }
}

/// All findings for one checked file, in display order, ending with the
/// per-file summary.
#[must_use]
pub fn findings(result: &CheckResult) -> Vec<Finding> {
    let path = result.path().display();
    let mut out = vec![Finding::new(Level::Info, format!("handle file: {path}"))];

    match result {
        CheckResult::Passed { report, .. } => {
            report_findings(report, &mut out);
            out.push(Finding::new(Level::Info, "everything is ok"));
        }
        CheckResult::Failed { report, .. } => {
            report_findings(report, &mut out);
            out.push(Finding::new(
                Level::Warn,
                format!("{} errors detected in `{path}`", report.error_count()),
            ));
        }
        CheckResult::Aborted { reason, .. } => {
            out.push(Finding::new(Level::Error, reason.to_string()));
            out.push(Finding::new(
                Level::Warn,
                format!("checking `{path}` aborted"),
            ));
        }
    }

    out
}

#[cfg(test)]
#[path = "findings_tests.rs"]
mod tests;
