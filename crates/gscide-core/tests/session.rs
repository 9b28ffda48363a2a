use gscide_core::{DebounceTimer, Document, LIVE_LINT_DEBOUNCE, LintSession};
use std::time::{Duration, Instant};

#[test]
fn test_debounce_timer_rearms_on_each_edit() {
    let mut timer = DebounceTimer::new(Duration::from_millis(500));
    let t0 = Instant::now();

    assert!(!timer.is_due(t0));

    timer.on_edit(t0);
    assert!(!timer.is_due(t0 + Duration::from_millis(499)));

    // A second edit before the deadline pushes the deadline out.
    timer.on_edit(t0 + Duration::from_millis(300));
    assert!(!timer.is_due(t0 + Duration::from_millis(700)));
    assert!(timer.is_due(t0 + Duration::from_millis(800)));
}

#[test]
fn test_debounce_timer_fires_once_per_deadline() {
    let mut timer = DebounceTimer::default();
    let t0 = Instant::now();

    timer.on_edit(t0);
    let fire = t0 + LIVE_LINT_DEBOUNCE;
    assert!(timer.take_due(fire));
    assert!(!timer.take_due(fire));
    assert!(!timer.is_due(fire + Duration::from_secs(60)));
}

#[test]
fn test_debounce_timer_cancel() {
    let mut timer = DebounceTimer::default();
    let t0 = Instant::now();

    timer.on_edit(t0);
    timer.cancel();
    assert!(!timer.is_due(t0 + Duration::from_secs(60)));
}

#[test]
fn test_session_coalesces_unchanged_text() {
    let doc = Document::from_text("init()\n{\n}\n");
    let mut session = LintSession::new();

    assert_eq!(session.linted_version(), None);
    assert!(!session.is_clean()); // nothing scanned yet

    assert!(session.run(&doc));
    assert!(session.is_clean());
    assert_eq!(session.linted_version(), Some(doc.version()));

    // Same text, same version: the diagnostics already represent it.
    assert!(!session.run(&doc));
}

#[test]
fn test_session_rescans_after_edit() {
    let mut doc = Document::from_text("init()\n{\n}\n");
    let mut session = LintSession::new();
    session.run(&doc);
    assert!(session.is_clean());

    doc.insert(doc.len_chars(), "broken(\n");
    assert!(session.run(&doc));
    assert!(!session.is_clean());
    assert_eq!(session.findings().len(), 1);
    assert_eq!(session.diagnostics().len(), 1);
    assert_eq!(session.diagnostics()[0].message, "Unmatched opening '('");

    // Fixing the text clears the set wholesale on the next run.
    doc.insert(doc.len_chars(), ")\n");
    session.run(&doc);
    assert!(session.is_clean());
    assert!(session.diagnostics().is_empty());
}

#[test]
fn test_force_rescans_unconditionally() {
    let doc = Document::from_text("ok()\n{\n}\n");
    let mut session = LintSession::new();

    session.run(&doc);
    assert!(!session.run(&doc));
    // The post-save courtesy pass always scans.
    session.force(&doc);
    assert!(session.is_clean());
}

#[test]
fn test_live_flag_is_plain_state() {
    let mut session = LintSession::new();
    assert!(session.is_live());
    session.set_live(false);
    assert!(!session.is_live());

    // Disabling live lint does not disable explicit scans.
    let doc = Document::from_text("(");
    session.force(&doc);
    assert_eq!(session.findings().len(), 1);
}

#[test]
fn test_diagnostic_offsets_follow_document_edits() {
    let mut doc = Document::from_text("{\n");
    let mut session = LintSession::new();
    session.run(&doc);
    assert_eq!(session.diagnostics()[0].range.start, 0);

    // Insert a line above; the re-run anchors the finding at its new offset.
    doc.insert(0, "// header\n");
    session.run(&doc);
    assert_eq!(session.diagnostics()[0].range.start, 10);
}
