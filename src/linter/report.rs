use indexmap::IndexMap;
use serde::Serialize;

/// Named bucket of line-level findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RuleCategory {
    #[serde(rename = "tabs")]
    Tabs,
    #[serde(rename = "4spaces")]
    FourSpaces,
    #[serde(rename = "commentStartWithSpace")]
    CommentSpacing,
    #[serde(rename = "if")]
    If,
    #[serde(rename = "case")]
    Case,
    #[serde(rename = "for")]
    For,
    #[serde(rename = "while")]
    While,
    #[serde(rename = "bashsubcall")]
    BashSubcall,
    #[serde(rename = "funcdef")]
    FuncDef,
}

impl RuleCategory {
    /// Every category, in the order findings are rendered.
    pub const ALL: [Self; 9] = [
        Self::Tabs,
        Self::FourSpaces,
        Self::CommentSpacing,
        Self::If,
        Self::Case,
        Self::For,
        Self::While,
        Self::BashSubcall,
        Self::FuncDef,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::FourSpaces => "4spaces",
            Self::CommentSpacing => "commentStartWithSpace",
            Self::If => "if",
            Self::Case => "case",
            Self::For => "for",
            Self::While => "while",
            Self::BashSubcall => "bashsubcall",
            Self::FuncDef => "funcdef",
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Multi-line control structure tracked by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    If,
    Case,
    For,
    While,
}

impl BlockKind {
    pub const ALL: [Self; 4] = [Self::If, Self::Case, Self::For, Self::While];

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Case => "case",
            Self::For => "for",
            Self::While => "while",
        }
    }

    /// Keyword that closes this construct.
    #[must_use]
    pub const fn closer(self) -> &'static str {
        match self {
            Self::If => "fi",
            Self::Case => "esac",
            Self::For | Self::While => "done",
        }
    }

    #[must_use]
    pub const fn category(self) -> RuleCategory {
        match self {
            Self::If => RuleCategory::If,
            Self::Case => RuleCategory::Case,
            Self::For => RuleCategory::For,
            Self::While => RuleCategory::While,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::If => 0,
            Self::Case => 1,
            Self::For => 2,
            Self::While => 3,
        }
    }
}

/// Whole-file conclusions gathered while lines stream through the scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct FileFacts {
    /// Line 1 is an accepted interpreter line.
    pub shebang_ok: bool,
    pub has_project_marker: bool,
    pub has_copyright: bool,
    pub has_author: bool,
    pub has_usage_def: bool,
    pub has_main_def: bool,
    pub has_main_call: bool,
}

impl FileFacts {
    /// Fold one source line into the facts.
    pub fn observe(&mut self, line: &str) {
        if line.contains('#') {
            let lower = line.to_lowercase();
            self.has_project_marker |= lower.contains("project");
            self.has_copyright |= lower.contains("copyright");
            self.has_author |= lower.contains("author");
        }
        self.has_usage_def |= line.contains("usage()");
        self.has_main_def |= line.contains("main()");
        self.has_main_call |= line.contains("main \"$@\"");
    }

    /// Missing-metadata findings, in reporting order.
    #[must_use]
    pub fn issues(&self) -> Vec<FileIssue> {
        let mut issues = Vec::new();
        if !self.has_project_marker {
            issues.push(FileIssue::MissingProject);
        }
        if !self.has_copyright {
            issues.push(FileIssue::MissingCopyright);
        }
        if !self.has_usage_def {
            issues.push(FileIssue::MissingUsage);
        }
        if !self.has_main_def {
            issues.push(FileIssue::MissingMainDef);
        }
        if self.has_main_def && !self.has_main_call {
            issues.push(FileIssue::MissingMainCall);
        }
        if !self.has_author {
            issues.push(FileIssue::MissingAuthor);
        }
        issues
    }
}

/// A file-level finding derived from [`FileFacts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileIssue {
    MissingProject,
    MissingCopyright,
    MissingUsage,
    MissingMainDef,
    MissingMainCall,
    MissingAuthor,
}

impl FileIssue {
    /// Whether this issue adds to the error count. `usage()` is advisory.
    #[must_use]
    pub const fn is_counted(self) -> bool {
        !matches!(self, Self::MissingUsage)
    }
}

/// Everything one scan found in one script.
///
/// Line numbers are 1-based and never include line 1, which belongs to
/// the shebang check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationReport {
    violations: IndexMap<RuleCategory, Vec<usize>>,
    facts: FileFacts,
    error_count: usize,
    total_lines: usize,
    unclosed_blocks: Vec<BlockKind>,
}

impl ViolationReport {
    pub(crate) fn record(&mut self, category: RuleCategory, line_number: usize) {
        self.violations
            .entry(category)
            .or_default()
            .push(line_number);
        self.error_count += 1;
    }

    pub(crate) fn facts_mut(&mut self) -> &mut FileFacts {
        &mut self.facts
    }

    pub(crate) const fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
    }

    /// Apply file-level penalties and note blocks still open at end of file.
    pub(crate) fn finalize(&mut self, unclosed_blocks: Vec<BlockKind>) {
        self.error_count += self
            .facts
            .issues()
            .into_iter()
            .filter(|issue| issue.is_counted())
            .count();
        self.unclosed_blocks = unclosed_blocks;
    }

    /// Line numbers recorded for a category, in discovery order.
    #[must_use]
    pub fn lines(&self, category: RuleCategory) -> &[usize] {
        self.violations
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[must_use]
    pub const fn violations(&self) -> &IndexMap<RuleCategory, Vec<usize>> {
        &self.violations
    }

    #[must_use]
    pub const fn facts(&self) -> &FileFacts {
        &self.facts
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    #[must_use]
    pub fn unclosed_blocks(&self) -> &[BlockKind] {
        &self.unclosed_blocks
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
