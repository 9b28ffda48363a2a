//! Structural linter for GSC source.
//!
//! A single forward pass over the document tracks bracket/parenthesis/brace
//! nesting and string-literal boundaries and reports mismatches with exact
//! line/column positions. The scan is total: malformed input produces
//! findings, never an error, and the result is a pure function of the text.
//!
//! Two behaviors are inherited from the reference tool and kept on purpose:
//!
//! - String state carries across line boundaries. An unterminated string
//!   silently absorbs every bracket until the next matching quote or the end
//!   of the document, even though GSC strings are normally single-line.
//! - Escape detection looks only at the single preceding character, so a
//!   quote after `\\` still reads as escaped.
//!
//! There is also no resynchronization after an unmatched closer: the stack
//! top is only consumed by a genuinely matching pop, so one stray closer can
//! cascade. Hosts treat lint results as advisory, never blocking.

use crate::diagnostics::{Diagnostic, DiagnosticRange};
use crate::document::Document;
use gscide_lang::{is_opening_bracket, matching_opener};
use std::fmt;

/// Diagnostic source tag attached to every finding.
pub const LINT_SOURCE: &str = "gscide-lint";

/// A position reported by the linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintPosition {
    /// 1-based line number.
    pub line: usize,
    /// 0-based column, in characters within the line.
    pub column: usize,
}

impl LintPosition {
    /// Create a new lint position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The structural problem a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintFindingKind {
    /// A closing bracket with no matching opener on top of the stack.
    UnmatchedClosing(char),
    /// An opening bracket still unclosed at the end of the document.
    UnmatchedOpening(char),
    /// A string literal opened but never terminated.
    UnterminatedString,
}

impl LintFindingKind {
    /// A stable machine-readable code for this kind of finding.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnmatchedClosing(_) => "unmatched-closing",
            Self::UnmatchedOpening(_) => "unmatched-opening",
            Self::UnterminatedString => "unterminated-string",
        }
    }
}

impl fmt::Display for LintFindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedClosing(ch) => write!(f, "Unmatched closing '{}'", ch),
            Self::UnmatchedOpening(ch) => write!(f, "Unmatched opening '{}'", ch),
            Self::UnterminatedString => write!(f, "Unterminated string literal"),
        }
    }
}

/// One lint finding: a position, the span length in characters, and what went
/// wrong there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintFinding {
    /// Where the finding is anchored.
    pub position: LintPosition,
    /// Span length in characters (always ≥ 1).
    pub length: usize,
    /// What kind of structural problem was found.
    pub kind: LintFindingKind,
}

impl LintFinding {
    fn at(line: usize, column: usize, kind: LintFindingKind) -> Self {
        Self {
            position: LintPosition::new(line, column),
            length: 1,
            kind,
        }
    }

    /// The human-readable message for this finding.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// An opening bracket waiting for its closer.
#[derive(Debug, Clone, Copy)]
struct OpenBracket {
    bracket: char,
    line: usize,
    column: usize,
}

/// An open string literal and where it started.
#[derive(Debug, Clone, Copy)]
struct OpenString {
    quote: char,
    line: usize,
    column: usize,
}

/// Scan a full document text and return its structural findings.
///
/// Findings come back in scan-discovery order: unmatched closers as the
/// left-to-right, top-to-bottom pass meets them, then (after the whole text is
/// consumed) an unterminated-string finding at the string's start, then the
/// still-open brackets in the order they were pushed. Callers wanting a
/// different order must sort explicitly.
///
/// Running the scan twice on the same text yields the same sequence.
pub fn lint(text: &str) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    let mut stack: Vec<OpenBracket> = Vec::new();
    let mut string: Option<OpenString> = None;

    for (row, line) in text.lines().enumerate() {
        let line_no = row + 1;
        let mut prev: Option<char> = None;
        for (column, ch) in line.chars().enumerate() {
            if (ch == '"' || ch == '\'') && prev != Some('\\') {
                match string {
                    None => {
                        string = Some(OpenString {
                            quote: ch,
                            line: line_no,
                            column,
                        });
                    }
                    Some(open) if open.quote == ch => string = None,
                    // The other quote kind is ordinary text inside a string.
                    Some(_) => {}
                }
            } else if string.is_none() {
                if is_opening_bracket(ch) {
                    stack.push(OpenBracket {
                        bracket: ch,
                        line: line_no,
                        column,
                    });
                } else if let Some(opener) = matching_opener(ch) {
                    if stack.last().map(|open| open.bracket) == Some(opener) {
                        stack.pop();
                    } else {
                        // The top is not consumed; only a matching pop
                        // removes a stack entry.
                        findings.push(LintFinding::at(
                            line_no,
                            column,
                            LintFindingKind::UnmatchedClosing(ch),
                        ));
                    }
                }
            }
            prev = Some(ch);
        }
    }

    if let Some(open) = string {
        findings.push(LintFinding::at(
            open.line,
            open.column,
            LintFindingKind::UnterminatedString,
        ));
    }
    for open in stack {
        findings.push(LintFinding::at(
            open.line,
            open.column,
            LintFindingKind::UnmatchedOpening(open.bracket),
        ));
    }

    findings
}

/// Translate lint findings into offset-ranged [`Diagnostic`]s for the given
/// document, in the same order.
///
/// The document must hold the same text the findings were produced from;
/// positions are clamped defensively either way.
pub fn to_diagnostics(findings: &[LintFinding], document: &Document) -> Vec<Diagnostic> {
    findings
        .iter()
        .map(|finding| {
            let start = document
                .position_to_offset(finding.position.line.saturating_sub(1), finding.position.column);
            let end = start + finding.length.max(1);
            Diagnostic::error(
                DiagnosticRange::new(start, end),
                finding.kind.code(),
                LINT_SOURCE,
                finding.message(),
            )
        })
        .collect()
}
