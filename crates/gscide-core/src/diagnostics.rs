//! Diagnostics data model.
//!
//! Lint findings are surfaced as structured diagnostics anchored to character
//! offsets. Hosts use them for:
//! - inline wavy underlines over the offending range
//! - a clickable problems list that navigates to the position
//! - gutter markers
//!
//! Diagnostics are derived state: each lint pass replaces the set wholesale,
//! and the set for a document is a pure function of its current text.

/// A half-open character-offset range (`start..end`) in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticRange {
    /// Range start offset (inclusive), in Unicode scalar values (`char`) from the start of the document.
    pub start: usize,
    /// Range end offset (exclusive), in Unicode scalar values (`char`) from the start of the document.
    pub end: usize,
}

impl DiagnosticRange {
    /// Create a new diagnostic range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

/// A single diagnostic item for the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic range in character offsets.
    pub range: DiagnosticRange,
    /// Optional diagnostic severity.
    pub severity: Option<DiagnosticSeverity>,
    /// Optional stable diagnostic code (e.g. `"unmatched-closing"`).
    pub code: Option<String>,
    /// Optional diagnostic source (e.g. `"gscide-lint"`).
    pub source: Option<String>,
    /// Diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic with a code and source tag.
    pub fn error(
        range: DiagnosticRange,
        code: impl Into<String>,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity: Some(DiagnosticSeverity::Error),
            code: Some(code.into()),
            source: Some(source.into()),
            message: message.into(),
        }
    }
}
