//! Line-level predicates.
//!
//! Every rule looks at one raw line and answers yes or no. Quoting and
//! comments are approximated with simple position checks, so a keyword
//! inside a string with an unbalanced quote can still be misjudged.

use std::sync::LazyLock;

use regex::Regex;

use super::report::BlockKind;

/// The two interpreter lines a script may start with.
pub const ACCEPTED_SHEBANGS: [&str; 2] = ["#!/bin/bash", "#!/usr/bin/env bash"];

const INDENT_WIDTH: usize = 4;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

static IF_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bif\b"));
static ELSE_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\belse\b"));
static FI_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bfi\b"));
static CASE_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bcase\b"));
static ESAC_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\besac\b"));
static FOR_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bfor\b"));
static WHILE_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bwhile\b"));
static DONE_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bdone\b"));

// Accepted opener shapes, matched against the trimmed line from its start.
static IF_FORM: LazyLock<Regex> = LazyLock::new(|| compile(r"^if \[.*\]; then"));
static CASE_FORM: LazyLock<Regex> = LazyLock::new(|| compile(r"^case .* in"));
static FOR_FORM: LazyLock<Regex> = LazyLock::new(|| compile(r"^for .* in .*; do"));
static WHILE_TEST_FORM: LazyLock<Regex> = LazyLock::new(|| compile(r"^while \[ .* \]; do"));
static WHILE_ANY_FORM: LazyLock<Regex> = LazyLock::new(|| compile(r"while .*; do"));

static FUNCTION_KEYWORD_DEF: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^function\s+\S+"));

#[must_use]
pub fn is_accepted_shebang(line: &str) -> bool {
    ACCEPTED_SHEBANGS.contains(&line)
}

#[must_use]
pub fn contains_tab(line: &str) -> bool {
    line.contains('\t')
}

#[must_use]
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Leading run of spaces is non-empty and not a multiple of four.
#[must_use]
pub fn misaligned_indent(line: &str) -> bool {
    leading_spaces(line) % INDENT_WIDTH != 0
}

/// A `#` comment whose text starts right after the hash: `#Comment`.
#[must_use]
pub fn comment_missing_space(line: &str) -> bool {
    let Some(hash) = line.find('#') else {
        return false;
    };
    if line.ends_with('#') || line[hash + 1..].starts_with(' ') || line.contains("$#") {
        return false;
    }
    !enclosed_in_quotes(line, |span| span.contains('#'))
}

/// Whether some span between the first and last occurrence of a quote
/// character satisfies `pred`, for either quote style.
fn enclosed_in_quotes(line: &str, pred: impl Fn(&str) -> bool) -> bool {
    ['"', '\''].into_iter().any(|quote| {
        match (line.find(quote), line.rfind(quote)) {
            (Some(open), Some(close)) if open < close => pred(&line[open + 1..close]),
            _ => false,
        }
    })
}

fn keyword_position(line: &str, word: &Regex) -> Option<usize> {
    word.find(line).map(|m| m.start())
}

/// The keyword comes before any `#` on the line.
fn before_comment(line: &str, pos: usize) -> bool {
    line.find('#').is_none_or(|hash| hash > pos)
}

fn inside_command_substitution(line: &str, pos: usize) -> bool {
    line[..pos].contains("$(") && line[pos..].contains(')')
}

fn double_quote_before(line: &str, pos: usize) -> bool {
    line[..pos].contains('"')
}

/// An `if` that is not written as `if [ ... ]; then`.
#[must_use]
pub fn malformed_if_opener(line: &str) -> bool {
    let Some(pos) = keyword_position(line, &IF_WORD) else {
        return false;
    };
    before_comment(line, pos)
        && !line.contains("$if")
        && !inside_command_substitution(line, pos)
        && !enclosed_in_quotes(line, |span| IF_WORD.is_match(span))
        && !IF_FORM.is_match(line.trim())
}

/// An `else` sharing its line with anything else.
#[must_use]
pub fn malformed_else(line: &str) -> bool {
    ELSE_WORD.is_match(line) && line.trim() != "else"
}

/// A `case` that is not written as `case ... in`.
#[must_use]
pub fn malformed_case_opener(line: &str) -> bool {
    keyword_position(line, &CASE_WORD).is_some_and(|pos| before_comment(line, pos))
        && !CASE_FORM.is_match(line.trim())
}

/// A `for` that is not written as `for ... in ...; do`.
#[must_use]
pub fn malformed_for_opener(line: &str) -> bool {
    let Some(pos) = keyword_position(line, &FOR_WORD) else {
        return false;
    };
    before_comment(line, pos) && !double_quote_before(line, pos) && !FOR_FORM.is_match(line.trim())
}

/// A `while` that is neither `while [ ... ]; do` nor `... while ...; do`.
#[must_use]
pub fn malformed_while_opener(line: &str) -> bool {
    let trimmed = line.trim();
    keyword_position(line, &WHILE_WORD).is_some_and(|pos| before_comment(line, pos))
        && !WHILE_TEST_FORM.is_match(trimmed)
        && !WHILE_ANY_FORM.is_match(trimmed)
}

/// Malformed opener check for a block kind.
#[must_use]
pub fn malformed_opener(kind: BlockKind, line: &str) -> bool {
    match kind {
        BlockKind::If => malformed_if_opener(line),
        BlockKind::Case => malformed_case_opener(line),
        BlockKind::For => malformed_for_opener(line),
        BlockKind::While => malformed_while_opener(line),
    }
}

/// The line carries the closing keyword of an open block.
#[must_use]
pub fn closes_block(kind: BlockKind, line: &str) -> bool {
    match kind {
        BlockKind::If => keyword_position(line, &FI_WORD)
            .is_some_and(|pos| !double_quote_before(line, pos)),
        BlockKind::Case => ESAC_WORD.is_match(line),
        BlockKind::For | BlockKind::While => DONE_WORD.is_match(line),
    }
}

/// The closing keyword is badly placed: `fi` must start in column one with
/// no trailing blanks, `esac` and `done` must stand alone on their line.
#[must_use]
pub fn malformed_closer(kind: BlockKind, line: &str) -> bool {
    match kind {
        BlockKind::If => line.trim() != line,
        BlockKind::Case | BlockKind::For | BlockKind::While => line.trim() != kind.closer(),
    }
}

/// Backtick command substitution, including the acute accent look-alike.
#[must_use]
pub fn uses_legacy_subcall(line: &str) -> bool {
    line.contains(['`', '\u{b4}'])
}

/// `function name` in either form, with or without `()`, instead of `name() {`.
#[must_use]
pub fn malformed_function_def(line: &str) -> bool {
    FUNCTION_KEYWORD_DEF.is_match(line.trim())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
