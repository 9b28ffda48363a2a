//! Find/replace helpers for the editor surface.
//!
//! Queries are plain text (escaped and compiled into a regex so that
//! case-insensitive matching stays Unicode-aware) and all public offsets are
//! **character** offsets. "Find next" wraps around the document end, matching
//! the behavior of the find dialog. Replacement never mutates the text here;
//! [`replace_next`] returns the edit for the caller to apply to its document.

use regex::{Regex, RegexBuilder, escape};
use std::ops::Range;

/// Options that control how a query is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    /// If `true`, performs a case-sensitive search.
    pub case_sensitive: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// A match, expressed as a half-open character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindMatch {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

/// A single-occurrence replacement for the caller to apply: delete `range`,
/// then insert `replacement` at `range.start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceEdit {
    /// The character range of the matched occurrence.
    pub range: Range<usize>,
    /// The text that replaces it.
    pub replacement: String,
}

/// Search errors.
#[derive(Debug)]
pub enum SearchError {
    /// The query could not be compiled (e.g. it exceeds the regex size limit).
    InvalidQuery(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(err) => write!(f, "Invalid search query: {}", err),
        }
    }
}

impl std::error::Error for SearchError {}

fn compile(query: &str, options: FindOptions) -> Result<Regex, SearchError> {
    RegexBuilder::new(&escape(query))
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(SearchError::InvalidQuery)
}

/// All occurrences of `query` in `text`, in document order.
///
/// An empty query yields no matches.
pub fn find_all(text: &str, query: &str, options: FindOptions) -> Result<Vec<FindMatch>, SearchError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let regex = compile(query, options)?;

    // Byte-to-char offset translation for every match boundary in one pass.
    let mut matches = Vec::new();
    let mut chars_before = 0usize;
    let mut last_byte = 0usize;
    for m in regex.find_iter(text) {
        chars_before += text[last_byte..m.start()].chars().count();
        let start = chars_before;
        chars_before += text[m.start()..m.end()].chars().count();
        last_byte = m.end();
        matches.push(FindMatch {
            start,
            end: chars_before,
        });
    }
    Ok(matches)
}

/// The first occurrence at or after the character offset `from`, wrapping
/// around to the top of the document if none follows.
pub fn find_next(
    text: &str,
    query: &str,
    from: usize,
    options: FindOptions,
) -> Result<Option<FindMatch>, SearchError> {
    let matches = find_all(text, query, options)?;
    Ok(matches
        .iter()
        .find(|m| m.start >= from)
        .or_else(|| matches.first())
        .copied())
}

/// Build the edit that replaces the next occurrence after `from` (with
/// wrap-around). Returns `None` when the query does not occur.
pub fn replace_next(
    text: &str,
    query: &str,
    replacement: &str,
    from: usize,
    options: FindOptions,
) -> Result<Option<ReplaceEdit>, SearchError> {
    Ok(find_next(text, query, from, options)?.map(|m| ReplaceEdit {
        range: m.start..m.end,
        replacement: replacement.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_char_offsets() {
        let matches = find_all("foo 你foo好 foo", "foo", FindOptions::default()).unwrap();
        assert_eq!(
            matches,
            vec![
                FindMatch { start: 0, end: 3 },
                FindMatch { start: 5, end: 8 },
                FindMatch { start: 10, end: 13 },
            ]
        );
    }

    #[test]
    fn test_find_next_wraps_around() {
        let text = "alpha beta alpha";
        let options = FindOptions::default();
        let first = find_next(text, "alpha", 1, options).unwrap().unwrap();
        assert_eq!(first.start, 11);
        // Past the last occurrence: wrap to the first.
        let wrapped = find_next(text, "alpha", 12, options).unwrap().unwrap();
        assert_eq!(wrapped.start, 0);
    }

    #[test]
    fn test_case_insensitive() {
        let options = FindOptions {
            case_sensitive: false,
        };
        let m = find_next("Level thread", "level", 0, options)
            .unwrap()
            .unwrap();
        assert_eq!((m.start, m.end), (0, 5));

        assert!(
            find_next("Level thread", "level", 0, FindOptions::default())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_query_is_literal_not_regex() {
        let m = find_next("a+b", "a+b", 0, FindOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!((m.start, m.end), (0, 3));
    }

    #[test]
    fn test_replace_next() {
        let edit = replace_next("x = old;", "old", "new", 0, FindOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(edit.range, 4..7);
        assert_eq!(edit.replacement, "new");

        assert!(
            replace_next("x = old;", "missing", "new", 0, FindOptions::default())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_empty_query_finds_nothing() {
        assert!(
            find_all("anything", "", FindOptions::default())
                .unwrap()
                .is_empty()
        );
    }
}
