use std::io::BufRead;

use log::trace;

use crate::error::{BashGuardError, Result};

use super::report::{BlockKind, RuleCategory, ViolationReport};
use super::rules;

/// Open/closed state per block kind. Only one instance of each kind is
/// tracked, so an inner `if` does not suspend the outer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OpenBlocks([bool; 4]);

impl OpenBlocks {
    const fn is_open(&self, kind: BlockKind) -> bool {
        self.0[kind.index()]
    }

    const fn set(&mut self, kind: BlockKind, open: bool) {
        self.0[kind.index()] = open;
    }

    fn still_open(&self) -> Vec<BlockKind> {
        BlockKind::ALL
            .into_iter()
            .filter(|kind| self.is_open(*kind))
            .collect()
    }
}

/// Mutable state for a single scan of a single script.
#[derive(Debug, Default)]
struct ScanContext {
    blocks: OpenBlocks,
    report: ViolationReport,
}

impl ScanContext {
    fn process_line(&mut self, number: usize, line: &str) {
        self.report.set_total_lines(number);
        self.report.facts_mut().observe(line);

        self.check_layout(number, line);
        self.check_if_block(number, line);
        for kind in [BlockKind::Case, BlockKind::For, BlockKind::While] {
            self.check_opener(kind, number, line);
            self.check_closer(kind, number, line);
        }
        self.check_legacy_syntax(number, line);
    }

    fn check_layout(&mut self, number: usize, line: &str) {
        if rules::contains_tab(line) {
            self.report.record(RuleCategory::Tabs, number);
        }
        if rules::misaligned_indent(line) {
            self.report.record(RuleCategory::FourSpaces, number);
        }
        if rules::comment_missing_space(line) {
            self.report.record(RuleCategory::CommentSpacing, number);
        }
    }

    fn check_if_block(&mut self, number: usize, line: &str) {
        self.check_opener(BlockKind::If, number, line);
        if self.blocks.is_open(BlockKind::If) && rules::malformed_else(line) {
            self.report.record(RuleCategory::If, number);
        }
        self.check_closer(BlockKind::If, number, line);
    }

    fn check_opener(&mut self, kind: BlockKind, number: usize, line: &str) {
        if rules::malformed_opener(kind, line) {
            trace!("line {number}: malformed `{}` opens block", kind.keyword());
            self.report.record(kind.category(), number);
            self.blocks.set(kind, true);
        }
    }

    fn check_closer(&mut self, kind: BlockKind, number: usize, line: &str) {
        if !self.blocks.is_open(kind) || !rules::closes_block(kind, line) {
            return;
        }
        trace!("line {number}: `{}` closes `{}` block", kind.closer(), kind.keyword());
        self.blocks.set(kind, false);
        if rules::malformed_closer(kind, line) {
            self.report.record(kind.category(), number);
        }
    }

    fn check_legacy_syntax(&mut self, number: usize, line: &str) {
        if rules::uses_legacy_subcall(line) {
            self.report.record(RuleCategory::BashSubcall, number);
        }
        if rules::malformed_function_def(line) {
            self.report.record(RuleCategory::FuncDef, number);
        }
    }

    fn finish(mut self) -> ViolationReport {
        self.report.finalize(self.blocks.still_open());
        self.report
    }
}

/// Single-pass style checker for bash scripts.
///
/// Holds no state between scans; every call builds a fresh context.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptLinter;

impl ScriptLinter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scan a whole script held in memory.
    ///
    /// # Errors
    /// Returns [`BashGuardError::MalformedShebang`] if line 1 is not an accepted shebang.
    pub fn lint(&self, source: &str) -> Result<ViolationReport> {
        Self::scan(source.lines().map(Ok::<_, std::io::Error>))
    }

    /// Scan a script from a buffered reader, one line at a time.
    ///
    /// # Errors
    /// Returns [`BashGuardError::MalformedShebang`] if line 1 is not an accepted shebang,
    /// or an I/O error if reading fails.
    pub fn lint_reader<R: BufRead>(&self, reader: R) -> Result<ViolationReport> {
        Self::scan(reader.lines())
    }

    fn scan<I, S>(lines: I) -> Result<ViolationReport>
    where
        I: IntoIterator<Item = std::io::Result<S>>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();

        let shebang = lines.next().transpose()?;
        let shebang = shebang.as_ref().map_or("", |line| line.as_ref());
        if !rules::is_accepted_shebang(shebang) {
            return Err(BashGuardError::MalformedShebang {
                found: shebang.to_string(),
            });
        }

        let mut ctx = ScanContext::default();
        ctx.report.set_total_lines(1);
        ctx.report.facts_mut().shebang_ok = true;
        for (index, line) in lines.enumerate() {
            let line = line?;
            ctx.process_line(index + 2, line.as_ref());
        }

        Ok(ctx.finish())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
