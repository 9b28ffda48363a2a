#![warn(missing_docs)]
//! `gscide-core` - headless kernel for a GSC script IDE.
//!
//! # Overview
//!
//! `gscide-core` owns everything an editor frontend for GSC scripts needs that
//! is not pixels: the document snapshot with character-offset coordinate
//! conversion, the structural linter, the diagnostics it produces, lint
//! scheduling state, and find/replace helpers. It performs no I/O and knows
//! nothing about widgets; a host (GUI shell, batch linter, editor server) wires
//! its text surface to these types.
//!
//! # The linter
//!
//! The centerpiece is [`lint::lint`]: a single-pass scanner that tracks
//! bracket nesting and string-literal boundaries across the entire document
//! and reports unmatched brackets and unterminated strings with exact
//! line/column positions. It is total and deterministic: malformed input is
//! precisely what it reports, via diagnostics, never by failing.
//!
//! ```rust
//! use gscide_core::lint::{lint, LintFindingKind};
//!
//! let findings = lint("init()\n{\n\tx = \"hi\";\n");
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].kind, LintFindingKind::UnmatchedOpening('{'));
//! assert_eq!((findings[0].position.line, findings[0].position.column), (2, 0));
//! ```
//!
//! # Feeding an editor surface
//!
//! [`Document`] translates the linter's `(line, column)` positions into
//! absolute character offsets so findings can be rendered as underline ranges,
//! and [`session::LintSession`] holds the debounce/coalescing policy for
//! as-you-type linting:
//!
//! ```rust
//! use gscide_core::{Document, LintSession};
//!
//! let mut doc = Document::from_text("onConnect()\n{\n");
//! let mut session = LintSession::new();
//!
//! assert!(session.run(&doc));
//! assert!(!session.run(&doc)); // unchanged text: coalesced, no rescan
//! assert_eq!(session.diagnostics().len(), 1);
//! assert_eq!(session.diagnostics()[0].range.start, 12); // the '{'
//!
//! doc.insert(doc.len_chars(), "}\n");
//! assert!(session.run(&doc));
//! assert!(session.is_clean());
//! ```
//!
//! # Module Description
//!
//! - [`document`] - rope-backed document snapshot and offset conversion
//! - [`diagnostics`] - the diagnostic data model hosts render from
//! - [`lint`] - the structural linter
//! - [`session`] - debounce timer and per-document lint state
//! - [`search`] - find/replace over character offsets
//! - [`line_ending`] - LF/CRLF handling

pub mod diagnostics;
pub mod document;
pub mod line_ending;
pub mod lint;
pub mod search;
pub mod session;

pub use diagnostics::{Diagnostic, DiagnosticRange, DiagnosticSeverity};
pub use document::Document;
pub use line_ending::LineEnding;
pub use lint::{LINT_SOURCE, LintFinding, LintFindingKind, LintPosition, lint, to_diagnostics};
pub use search::{
    FindMatch, FindOptions, ReplaceEdit, SearchError, find_all, find_next, replace_next,
};
pub use session::{DebounceTimer, LIVE_LINT_DEBOUNCE, LintSession};
