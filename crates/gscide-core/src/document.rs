//! Document snapshot and coordinate conversion.
//!
//! [`Document`] owns the text of one open script as a rope, giving O(log N)
//! line/offset conversion on large files. All public offsets are **character**
//! offsets (Unicode scalar values), and line starts include one separator for
//! every preceding line, so an `(offset, length)` pair can be handed directly
//! to a text widget for range selection.
//!
//! The linter never sees this type mutably: it consumes a text snapshot and
//! the document only translates the resulting positions back to offsets.

use crate::line_ending::LineEnding;
use ropey::Rope;
use std::ops::Range;

/// An in-memory script document: rope-backed text, a version counter bumped on
/// every edit, and the line-ending convention detected at load time.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    line_ending: LineEnding,
    version: u64,
    modified: bool,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            line_ending: LineEnding::Lf,
            version: 0,
            modified: false,
        }
    }

    /// Create a document from source text.
    ///
    /// CRLF newlines are normalized to LF; the detected convention is kept for
    /// [`Document::text_for_save`].
    pub fn from_text(text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        Self {
            rope: Rope::from_str(&LineEnding::normalize(text)),
            line_ending,
            version: 0,
            modified: false,
        }
    }

    /// The full document text (LF newlines).
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The full document text with the preferred line ending applied.
    pub fn text_for_save(&self) -> String {
        self.line_ending.apply(&self.rope.to_string())
    }

    /// The line-ending convention detected when the document was loaded.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Total character count.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total line count. An empty document has one (empty) line.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// The text of a line (0-based), without its trailing newline.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Document version, incremented by every successful edit.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the document has been edited since load or the last
    /// [`Document::mark_saved`].
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after the host writes the file out.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Insert text at a character offset (clamped to the document end).
    ///
    /// Inserted text is normalized to LF newlines.
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, &LineEnding::normalize(text));
        self.touch();
    }

    /// Delete a half-open character range (clamped to the document bounds).
    pub fn delete(&mut self, range: Range<usize>) {
        let start = range.start.min(self.rope.len_chars());
        let end = range.end.min(self.rope.len_chars());
        if start < end {
            self.rope.remove(start..end);
            self.touch();
        }
    }

    /// Convert a `(line, column)` pair (both 0-based, columns in characters)
    /// to an absolute character offset.
    ///
    /// Out-of-range lines clamp to the last line; out-of-range columns clamp
    /// to the line length (excluding its newline).
    pub fn position_to_offset(&self, line: usize, column: usize) -> usize {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line = line.min(last_line);
        let line_start = self.rope.line_to_char(line);
        let line_end = if line < last_line {
            // Exclude the separator so a clamped column stays on this line.
            self.rope.line_to_char(line + 1) - 1
        } else {
            self.rope.len_chars()
        };
        line_start + column.min(line_end - line_start)
    }

    /// Convert an absolute character offset to a `(line, column)` pair
    /// (both 0-based). Offsets past the end clamp to the final position.
    pub fn offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_offset);
        (line, char_offset - self.rope.line_to_char(line))
    }

    fn touch(&mut self) {
        self.version += 1;
        self.modified = true;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.len_chars(), 0);
        assert_eq!(doc.len_lines(), 1);
        assert_eq!(doc.text(), "");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_crlf_normalized_on_load_and_restored_on_save() {
        let doc = Document::from_text("init()\r\n{\r\n}\r\n");
        assert_eq!(doc.text(), "init()\n{\n}\n");
        assert_eq!(doc.line_ending(), LineEnding::Crlf);
        assert_eq!(doc.text_for_save(), "init()\r\n{\r\n}\r\n");
    }

    #[test]
    fn test_position_offset_round_trip() {
        let doc = Document::from_text("ABC\nDEF\nGHI");

        assert_eq!(doc.position_to_offset(0, 0), 0);
        assert_eq!(doc.position_to_offset(0, 2), 2);
        // Line starts count one separator per preceding line.
        assert_eq!(doc.position_to_offset(1, 0), 4);
        assert_eq!(doc.position_to_offset(2, 1), 9);

        assert_eq!(doc.offset_to_position(0), (0, 0));
        assert_eq!(doc.offset_to_position(4), (1, 0));
        assert_eq!(doc.offset_to_position(9), (2, 1));
    }

    #[test]
    fn test_position_clamping() {
        let doc = Document::from_text("ab\ncd");
        // Column past end of line clamps to the line length.
        assert_eq!(doc.position_to_offset(0, 99), 2);
        // Line past end clamps to the last line.
        assert_eq!(doc.position_to_offset(99, 0), 3);
        assert_eq!(doc.offset_to_position(99), (1, 2));
    }

    #[test]
    fn test_non_ascii_columns_are_characters() {
        let doc = Document::from_text("你好\nworld");
        assert_eq!(doc.len_chars(), 8);
        assert_eq!(doc.position_to_offset(1, 0), 3);
        assert_eq!(doc.offset_to_position(1), (0, 1));
    }

    #[test]
    fn test_edits_bump_version_and_modified() {
        let mut doc = Document::from_text("abc");
        assert_eq!(doc.version(), 0);

        doc.insert(3, "def");
        assert_eq!(doc.text(), "abcdef");
        assert_eq!(doc.version(), 1);
        assert!(doc.is_modified());

        doc.delete(0..3);
        assert_eq!(doc.text(), "def");
        assert_eq!(doc.version(), 2);

        // Degenerate edits are no-ops and do not bump the version.
        doc.insert(0, "");
        doc.delete(2..2);
        assert_eq!(doc.version(), 2);

        doc.mark_saved();
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_line_text() {
        let doc = Document::from_text("one\ntwo\n");
        assert_eq!(doc.line_text(0).as_deref(), Some("one"));
        assert_eq!(doc.line_text(1).as_deref(), Some("two"));
        assert_eq!(doc.line_text(2).as_deref(), Some(""));
        assert_eq!(doc.line_text(3), None);
    }
}
