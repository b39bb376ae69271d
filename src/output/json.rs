use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;
use crate::linter::{BlockKind, FileFacts, RuleCategory, ViolationReport};

use super::OutputFormatter;
use super::findings::{Finding, findings};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    aborted: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    status: &'static str,
    error_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_lines: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<&'a IndexMap<RuleCategory, Vec<usize>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facts: Option<&'a FileFacts>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unclosed_blocks: Vec<BlockKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    findings: Vec<Finding>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: results.len(),
                passed: results.iter().filter(|r| CheckResult::is_passed(r)).count(),
                failed: results.iter().filter(|r| CheckResult::is_failed(r)).count(),
                aborted: results.iter().filter(|r| CheckResult::is_aborted(r)).count(),
            },
            results: results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> FileResult<'_> {
    let report = result.report();
    FileResult {
        path: result.path().display().to_string(),
        status: result.status_str(),
        error_count: result.error_count(),
        total_lines: report.map(ViolationReport::total_lines),
        violations: report.map(ViolationReport::violations),
        facts: report.map(ViolationReport::facts),
        unclosed_blocks: report
            .map(|r| r.unclosed_blocks().to_vec())
            .unwrap_or_default(),
        reason: result.abort_reason().map(ToString::to_string),
        findings: findings(result),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
