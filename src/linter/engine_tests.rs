use std::io::Cursor;

use super::*;
use crate::linter::test_fixtures::{CLEAN_SCRIPT, HEADER_LINES, script_with};

fn lint(source: &str) -> ViolationReport {
    ScriptLinter::new().lint(source).unwrap()
}

fn body_line(offset: usize) -> usize {
    HEADER_LINES + offset
}

#[test]
fn both_shebangs_are_accepted() {
    for shebang in ["#!/bin/bash\n", "#!/usr/bin/env bash\n"] {
        let report = ScriptLinter::new().lint(shebang).unwrap();
        assert!(report.facts().shebang_ok);
    }
}

#[test]
fn wrong_shebang_aborts_scan() {
    let err = ScriptLinter::new()
        .lint("#!/bin/sh\n\techo `ls`\n")
        .unwrap_err();

    let BashGuardError::MalformedShebang { found } = err else {
        panic!("expected MalformedShebang, got {err:?}");
    };
    assert_eq!(found, "#!/bin/sh");
}

#[test]
fn empty_source_has_no_shebang() {
    let err = ScriptLinter::new().lint("").unwrap_err();
    assert!(matches!(err, BashGuardError::MalformedShebang { ref found } if found.is_empty()));
}

#[test]
fn shebang_line_never_reaches_line_rules() {
    // A tab-free, comment-like first line must not be judged as a comment.
    let report = lint("#!/usr/bin/env bash\n");
    assert!(report.violations().is_empty());
    assert_eq!(report.total_lines(), 1);
}

#[test]
fn clean_script_has_no_findings() {
    let report = lint(CLEAN_SCRIPT);
    assert!(report.violations().is_empty(), "unexpected findings: {report:?}");
    assert_eq!(report.error_count(), 0);
    assert!(report.unclosed_blocks().is_empty());
}

#[test]
fn tab_line_recorded_once() {
    let report = lint(&script_with("\t\techo\ttwo\n"));
    assert_eq!(report.lines(RuleCategory::Tabs), &[body_line(1)]);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn indentation_width() {
    let source = script_with("  two\n    four\n      six\n        eight\n");
    let report = lint(&source);
    assert_eq!(
        report.lines(RuleCategory::FourSpaces),
        &[body_line(1), body_line(3)]
    );
}

#[test]
fn comment_spacing_line_numbers() {
    let report = lint(&script_with("#bad\n# good\necho hi #bad\n"));
    assert_eq!(
        report.lines(RuleCategory::CommentSpacing),
        &[body_line(1), body_line(3)]
    );
}

#[test]
fn well_formed_if_does_not_fire() {
    let report = lint(&script_with("if [ -n \"$x\" ]; then\n    echo yes\nfi\n"));
    assert!(report.lines(RuleCategory::If).is_empty());
    assert!(report.is_clean());
}

#[test]
fn if_without_brackets_fires() {
    let report = lint(&script_with("if true; then\n    echo yes\nfi\n"));
    assert_eq!(report.lines(RuleCategory::If), &[body_line(1)]);
    assert_eq!(report.error_count(), 1);
    assert!(report.unclosed_blocks().is_empty());
}

#[test]
fn else_and_fi_checked_while_if_open() {
    let source = script_with("if true; then\n    echo a\nelse echo b\n    fi\n");
    let report = lint(&source);
    assert_eq!(
        report.lines(RuleCategory::If),
        &[body_line(1), body_line(3), body_line(4)]
    );
}

#[test]
fn else_ignored_when_no_if_open() {
    let source = script_with("if [ -n \"$x\" ]; then\n    echo a\nelse echo b\nfi\n");
    let report = lint(&source);
    assert!(report.lines(RuleCategory::If).is_empty());
}

#[test]
fn one_line_malformed_if_opens_and_closes() {
    let report = lint(&script_with("if true; then echo a; fi\n"));
    assert_eq!(report.lines(RuleCategory::If), &[body_line(1)]);
    assert!(report.unclosed_blocks().is_empty());
}

#[test]
fn nested_if_shares_one_open_state() {
    let source = script_with("if true; then\n    if false; then\n        echo x\n    fi\nfi # outer\n");
    let report = lint(&source);
    // The inner, indented `fi` closes the only tracked `if`; the outer
    // `fi # outer` arrives with no block open and is not judged.
    assert_eq!(
        report.lines(RuleCategory::If),
        &[body_line(1), body_line(2), body_line(4)]
    );
}

#[test]
fn indented_fi_is_flagged() {
    let report = lint(&script_with("if true; then\n    echo x\n    fi\n"));
    assert_eq!(report.lines(RuleCategory::If), &[body_line(1), body_line(3)]);
    assert!(report.unclosed_blocks().is_empty());
}

#[test]
fn fi_with_trailing_command_is_accepted() {
    let report = lint(&script_with("if true; then\n    echo x\nfi; echo y\n"));
    assert_eq!(report.lines(RuleCategory::If), &[body_line(1)]);
    assert!(report.unclosed_blocks().is_empty());
}

#[test]
fn case_and_esac() {
    let source = script_with("case $x\n    a) echo a ;;\nesac # end\n");
    let report = lint(&source);
    assert_eq!(
        report.lines(RuleCategory::Case),
        &[body_line(1), body_line(3)]
    );
}

#[test]
fn for_and_done() {
    let source = script_with("for f in *.sh\ndo\n    echo \"$f\"\ndone > out.txt\n");
    let report = lint(&source);
    assert_eq!(report.lines(RuleCategory::For), &[body_line(1), body_line(4)]);
}

#[test]
fn while_and_done() {
    let source = script_with("while true\ndo\n    sleep 1\ndone\n");
    let report = lint(&source);
    assert_eq!(report.lines(RuleCategory::While), &[body_line(1)]);
    assert!(report.unclosed_blocks().is_empty());
}

#[test]
fn done_closes_for_and_while_together() {
    let source = script_with("for x\nwhile y\ndone # both\n");
    let report = lint(&source);
    assert_eq!(report.lines(RuleCategory::For), &[body_line(1), body_line(3)]);
    assert_eq!(
        report.lines(RuleCategory::While),
        &[body_line(2), body_line(3)]
    );
}

#[test]
fn backtick_finding_disappears_after_fix() {
    let before = lint(&script_with("files=`ls`\n#note\n"));
    let after = lint(&script_with("files=$(ls)\n#note\n"));

    assert_eq!(before.lines(RuleCategory::BashSubcall), &[body_line(1)]);
    assert!(after.lines(RuleCategory::BashSubcall).is_empty());
    assert_eq!(
        before.lines(RuleCategory::CommentSpacing),
        after.lines(RuleCategory::CommentSpacing)
    );
    assert_eq!(before.error_count(), after.error_count() + 1);
}

#[test]
fn function_keyword_definition() {
    let report = lint(&script_with("function helper() {\n    true\n}\n"));
    assert_eq!(report.lines(RuleCategory::FuncDef), &[body_line(1)]);
}

#[test]
fn function_keyword_without_parens() {
    let report = lint(&script_with("function helper {\n    true\n}\n"));
    assert_eq!(report.lines(RuleCategory::FuncDef), &[body_line(1)]);
}

#[test]
fn one_line_can_fire_several_rules() {
    let report = lint(&script_with("  \tx=`ls` #bad\n"));
    let line = body_line(1);
    assert_eq!(report.lines(RuleCategory::Tabs), &[line]);
    assert_eq!(report.lines(RuleCategory::FourSpaces), &[line]);
    assert_eq!(report.lines(RuleCategory::CommentSpacing), &[line]);
    assert_eq!(report.lines(RuleCategory::BashSubcall), &[line]);
    assert_eq!(report.error_count(), 4);
}

#[test]
fn categories_keep_discovery_order() {
    let report = lint(&script_with("x=`ls`\n\techo\n"));
    let keys: Vec<_> = report.violations().keys().copied().collect();
    assert_eq!(keys, vec![RuleCategory::BashSubcall, RuleCategory::Tabs]);
}

#[test]
fn missing_copyright_counts_once() {
    let source = "#!/bin/bash\n# Project: X\n# Author: Y\nusage() {\n    true\n}\nmain() {\n    true\n}\nmain \"$@\"\n";
    let report = lint(source);
    let facts = report.facts();

    assert!(facts.has_project_marker);
    assert!(facts.has_author);
    assert!(!facts.has_copyright);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn main_defined_but_never_called() {
    let source = "#!/bin/bash\n# Project: X\n# Author: Y\n# Copyright Z\nusage() {\n    true\n}\nmain() {\n    true\n}\n";
    let report = lint(source);

    assert!(report.facts().has_main_def);
    assert!(!report.facts().has_main_call);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn missing_usage_is_advisory() {
    let source = "#!/bin/bash\n# Project: X\n# Author: Y\n# Copyright Z\nmain() {\n    true\n}\nmain \"$@\"\n";
    let report = lint(source);

    assert!(!report.facts().has_usage_def);
    assert_eq!(report.error_count(), 0);
}

#[test]
fn bare_script_counts_every_missing_fact() {
    let report = lint("#!/bin/bash\necho hi\n");
    // project, copyright, author, main definition
    assert_eq!(report.error_count(), 4);
}

#[test]
fn unclosed_block_is_listed_without_penalty() {
    let report = lint(&script_with("if true; then\n    echo never closed\n"));
    assert_eq!(report.unclosed_blocks(), &[BlockKind::If]);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn line_numbers_stay_in_range() {
    let source = script_with("\tone\n  two\n#three\n`four`\n");
    let report = lint(&source);
    let total = report.total_lines();

    assert_eq!(total, body_line(4));
    for lines in report.violations().values() {
        assert!(lines.iter().all(|&n| (2..=total).contains(&n)));
    }
}

#[test]
fn repeated_scans_are_identical() {
    let source = script_with("if true; then\n\techo `ls`\n");
    let linter = ScriptLinter::new();
    assert_eq!(linter.lint(&source).unwrap(), linter.lint(&source).unwrap());
}

#[test]
fn reader_and_str_agree() {
    let source = script_with("  x\n#y\nfunction f() {\n}\n");
    let from_reader = ScriptLinter::new()
        .lint_reader(Cursor::new(source.as_bytes()))
        .unwrap();
    assert_eq!(from_reader, lint(&source));
}

#[test]
fn reader_handles_crlf() {
    let source = "#!/bin/bash\r\n# Project\r\n";
    let report = ScriptLinter::new()
        .lint_reader(Cursor::new(source.as_bytes()))
        .unwrap();
    assert!(report.facts().has_project_marker);
}

#[test]
fn reader_rejects_invalid_utf8() {
    let bytes: &[u8] = b"#!/bin/bash\n\xff\xfe\n";
    let err = ScriptLinter::new().lint_reader(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, BashGuardError::Io(_)));
}

