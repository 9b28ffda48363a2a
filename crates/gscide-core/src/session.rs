//! Lint scheduling state for interactive hosts.
//!
//! Every lint invocation is a full rescan, so an editor surface should not
//! rescan on every keystroke and should never run overlapping scans over a
//! mutating document. This module makes the caller-side policy explicit:
//!
//! - [`DebounceTimer`] is a restartable single-shot deadline the host arms on
//!   every text change and polls from its event loop. It is parameterized on
//!   [`Instant`] so tests never need to sleep.
//! - [`LintSession`] remembers which document version its diagnostics
//!   describe, skipping scans whose result would be identical and replacing
//!   the diagnostic set wholesale when the text has changed.
//!
//! Lint results are advisory; nothing here blocks editing or saving.

use crate::diagnostics::Diagnostic;
use crate::document::Document;
use crate::lint::{self, LintFinding};
use std::time::{Duration, Instant};

/// The idle delay used for live linting while the user types.
pub const LIVE_LINT_DEBOUNCE: Duration = Duration::from_millis(500);

/// A restartable single-shot timer, driven by the host's clock.
#[derive(Debug, Clone, Copy)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Create a timer with the given idle delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer: the deadline moves to `now + delay`.
    pub fn on_edit(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` if the timer is armed and its deadline has passed.
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// Consume a due deadline. Returns `true` exactly once per armed deadline
    /// once it has elapsed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Disarm the timer without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(LIVE_LINT_DEBOUNCE)
    }
}

/// Lint state for one open document.
///
/// The session owns the current diagnostic set and the version of the text it
/// was computed from. [`LintSession::run`] coalesces: if the document has not
/// changed since the last scan, the existing diagnostics already represent the
/// current text and no scan runs.
#[derive(Debug, Clone)]
pub struct LintSession {
    live: bool,
    linted_version: Option<u64>,
    findings: Vec<LintFinding>,
    diagnostics: Vec<Diagnostic>,
}

impl LintSession {
    /// Create a session with live linting enabled.
    pub fn new() -> Self {
        Self {
            live: true,
            linted_version: None,
            findings: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Whether live (as-you-type) linting is enabled.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Enable or disable live linting. Explicit scans via
    /// [`LintSession::force`] still work when disabled.
    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    /// Lint the document unless the current diagnostics already describe its
    /// text. Returns `true` if a scan actually ran.
    pub fn run(&mut self, document: &Document) -> bool {
        if self.linted_version == Some(document.version()) {
            return false;
        }
        self.rescan(document);
        true
    }

    /// Lint unconditionally (the post-save / post-deploy courtesy pass).
    pub fn force(&mut self, document: &Document) {
        self.rescan(document);
    }

    /// The findings of the most recent scan, in scan order.
    pub fn findings(&self) -> &[LintFinding] {
        &self.findings
    }

    /// The offset-ranged diagnostics of the most recent scan, in scan order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if at least one scan has run and found nothing.
    pub fn is_clean(&self) -> bool {
        self.linted_version.is_some() && self.diagnostics.is_empty()
    }

    /// The document version the current diagnostics describe, if any scan has
    /// run yet.
    pub fn linted_version(&self) -> Option<u64> {
        self.linted_version
    }

    fn rescan(&mut self, document: &Document) {
        self.findings = lint::lint(&document.text());
        self.diagnostics = lint::to_diagnostics(&self.findings, document);
        self.linted_version = Some(document.version());
    }
}

impl Default for LintSession {
    fn default() -> Self {
        Self::new()
    }
}
