//! `gscide-highlight-simple` - regex-based GSC syntax highlighting for `gscide-core`.
//!
//! GSC is simple enough that a per-line rule set covers everything except
//! block comments, which get a dedicated pass that carries "inside `/* ... */`"
//! state across lines (an unclosed `/*` styles through to the end of the
//! document). It is *not* a parser: rules may overlap, and spans are returned
//! in paint order, so a host drawing them in sequence gets the same result the
//! reference editor produced (later spans win).

use gscide_core::Document;
use regex::Regex;

/// Identifies a style for the theme layer to map to actual colors.
pub type StyleId = u32;

/// Style for control-flow and declaration keywords.
pub const STYLE_KEYWORD: StyleId = 0x0100_0001;
/// Style for builtin identifiers (`self`, `level`, engine calls).
pub const STYLE_BUILTIN: StyleId = 0x0100_0002;
/// Style for numeric literals.
pub const STYLE_NUMBER: StyleId = 0x0100_0003;
/// Style for string literals.
pub const STYLE_STRING: StyleId = 0x0100_0004;
/// Style for comments (line and block).
pub const STYLE_COMMENT: StyleId = 0x0100_0005;
/// Style for preprocessor lines (`#include ...`).
pub const STYLE_PREPROCESSOR: StyleId = 0x0100_0006;
/// Style for function-call names.
pub const STYLE_FUNCTION: StyleId = 0x0100_0007;

/// A styled half-open character-offset range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
    /// The style to paint this range with.
    pub style: StyleId,
}

/// A single regex highlighting rule, applied per line.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
    style: StyleId,
    capture_group: Option<usize>,
}

impl RegexRule {
    /// Compile a rule that styles every match of `pattern`.
    pub fn new(pattern: &str, style: StyleId) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            style,
            capture_group: None,
        })
    }

    /// Style only a capture group of each match.
    ///
    /// The regex crate has no lookahead, so "identifier followed by `(`" is
    /// expressed as a group over the identifier.
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.capture_group = Some(group);
        self
    }

    /// The style this rule paints.
    pub fn style(&self) -> StyleId {
        self.style
    }
}

/// The GSC syntax highlighter: an ordered rule list plus the block-comment
/// pass.
#[derive(Debug, Clone)]
pub struct GscHighlighter {
    rules: Vec<RegexRule>,
}

impl GscHighlighter {
    /// Build a highlighter from an explicit rule list.
    pub fn new(rules: Vec<RegexRule>) -> Self {
        Self { rules }
    }

    /// The default GSC grammar, built from the `gscide-lang` tables.
    ///
    /// Rule order matters: function-call names come last so `name(` paints
    /// over an earlier keyword/builtin span, matching the reference editor.
    pub fn gsc_default() -> Result<Self, regex::Error> {
        let keywords = format!(r"\b(?:{})\b", gscide_lang::KEYWORDS.join("|"));
        let builtins = format!(r"\b(?:{})\b", gscide_lang::BUILTINS.join("|"));
        Ok(Self::new(vec![
            RegexRule::new(&keywords, STYLE_KEYWORD)?,
            RegexRule::new(&builtins, STYLE_BUILTIN)?,
            RegexRule::new(r"\b[0-9]+\.?[0-9]*\b", STYLE_NUMBER)?,
            RegexRule::new(r#""[^"\\]*(?:\\.[^"\\]*)*""#, STYLE_STRING)?,
            RegexRule::new(r#"'[^'\\]*(?:\\.[^'\\]*)*'"#, STYLE_STRING)?,
            RegexRule::new(r"^\s*#\w+.*", STYLE_PREPROCESSOR)?,
            RegexRule::new(r"//.*", STYLE_COMMENT)?,
            RegexRule::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(", STYLE_FUNCTION)?
                .with_capture_group(1),
        ]))
    }

    /// The rules, in paint order.
    pub fn rules(&self) -> &[RegexRule] {
        &self.rules
    }

    /// Run the rules and the block-comment pass over the whole document,
    /// returning spans in paint order (char offsets).
    pub fn highlight(&self, document: &Document) -> Vec<StyleSpan> {
        let mut spans = Vec::new();
        let line_count = document.len_lines();

        for line in 0..line_count {
            let Some(line_text) = document.line_text(line) else {
                continue;
            };
            let line_start = document.position_to_offset(line, 0);

            for rule in &self.rules {
                if let Some(group) = rule.capture_group {
                    for caps in rule.regex.captures_iter(&line_text) {
                        let Some(m) = caps.get(group) else {
                            continue;
                        };
                        if let Some(span) = span_from_match(
                            line_start,
                            &line_text,
                            m.start(),
                            m.end(),
                            rule.style,
                        ) {
                            spans.push(span);
                        }
                    }
                } else {
                    for m in rule.regex.find_iter(&line_text) {
                        if let Some(span) = span_from_match(
                            line_start,
                            &line_text,
                            m.start(),
                            m.end(),
                            rule.style,
                        ) {
                            spans.push(span);
                        }
                    }
                }
            }
        }

        // Block comments carry state across lines, so they run as their own
        // pass and paint over everything matched above.
        spans.extend(block_comment_spans(document));
        spans
    }
}

/// Scan the document for `/* ... */` regions, including an unclosed `/*`
/// running to the end of the document, and return one span per line touched.
fn block_comment_spans(document: &Document) -> Vec<StyleSpan> {
    let (block_start, block_end) = (
        gscide_lang::COMMENTS.block_start,
        gscide_lang::COMMENTS.block_end,
    );
    let mut spans = Vec::new();
    let mut in_comment = false;

    for line in 0..document.len_lines() {
        let Some(line_text) = document.line_text(line) else {
            continue;
        };
        let line_start = document.position_to_offset(line, 0);
        let mut search_from = 0usize;

        loop {
            let comment_start = if in_comment {
                search_from
            } else {
                match line_text[search_from..].find(block_start) {
                    Some(found) => search_from + found,
                    None => break,
                }
            };

            match line_text[comment_start..].find(block_end) {
                Some(found) => {
                    let comment_end = comment_start + found + block_end.len();
                    if let Some(span) = span_from_match(
                        line_start,
                        &line_text,
                        comment_start,
                        comment_end,
                        STYLE_COMMENT,
                    ) {
                        spans.push(span);
                    }
                    in_comment = false;
                    search_from = comment_end;
                }
                None => {
                    if let Some(span) = span_from_match(
                        line_start,
                        &line_text,
                        comment_start,
                        line_text.len(),
                        STYLE_COMMENT,
                    ) {
                        spans.push(span);
                    }
                    in_comment = true;
                    break;
                }
            }
        }
    }

    spans
}

fn span_from_match(
    line_start_offset: usize,
    line_text: &str,
    match_start_byte: usize,
    match_end_byte: usize,
    style: StyleId,
) -> Option<StyleSpan> {
    if match_start_byte >= match_end_byte || match_end_byte > line_text.len() {
        return None;
    }

    let start_col = line_text[..match_start_byte].chars().count();
    let end_col = line_text[..match_end_byte].chars().count();
    if start_col >= end_col {
        return None;
    }

    Some(StyleSpan {
        start: line_start_offset + start_col,
        end: line_start_offset + end_col,
        style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_of(text: &str) -> Vec<StyleSpan> {
        let document = Document::from_text(text);
        GscHighlighter::gsc_default().unwrap().highlight(&document)
    }

    fn styled(spans: &[StyleSpan], style: StyleId) -> Vec<(usize, usize)> {
        spans
            .iter()
            .filter(|s| s.style == style)
            .map(|s| (s.start, s.end))
            .collect()
    }

    #[test]
    fn test_keywords_builtins_numbers_strings() {
        let spans = spans_of("if (x > 10)\n\tself iprintln(\"hi\");\n");

        assert_eq!(styled(&spans, STYLE_KEYWORD), vec![(0, 2)]);
        // "self" and "iprintln" are both builtins.
        assert_eq!(styled(&spans, STYLE_BUILTIN), vec![(13, 17), (18, 26)]);
        assert_eq!(styled(&spans, STYLE_NUMBER), vec![(8, 10)]);
        assert_eq!(styled(&spans, STYLE_STRING), vec![(27, 31)]);
    }

    #[test]
    fn test_function_name_is_captured_without_paren() {
        let spans = spans_of("doStuff(x);\n");
        assert_eq!(styled(&spans, STYLE_FUNCTION), vec![(0, 7)]);
    }

    #[test]
    fn test_function_span_follows_keyword_span_in_paint_order() {
        // "if (" matches both the keyword rule and the call rule; the call
        // span is emitted later so it wins when painted in order.
        let spans = spans_of("if (x)\n");
        let keyword_index = spans.iter().position(|s| s.style == STYLE_KEYWORD);
        let function_index = spans.iter().position(|s| s.style == STYLE_FUNCTION);
        assert!(keyword_index.unwrap() < function_index.unwrap());
    }

    #[test]
    fn test_line_comment_and_preprocessor() {
        let spans = spans_of("#include maps\\mp\\_utility;\nx = 1; // trailing\n");
        assert_eq!(styled(&spans, STYLE_PREPROCESSOR), vec![(0, 26)]);
        assert_eq!(styled(&spans, STYLE_COMMENT), vec![(34, 45)]);
    }

    #[test]
    fn test_block_comment_single_line() {
        let spans = spans_of("a /* b */ c\n");
        assert_eq!(styled(&spans, STYLE_COMMENT), vec![(2, 9)]);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let spans = spans_of("a /* one\ntwo\nthree */ b\n");
        // One span per line touched by the comment.
        assert_eq!(
            styled(&spans, STYLE_COMMENT),
            vec![(2, 8), (9, 12), (13, 21)]
        );
    }

    #[test]
    fn test_unclosed_block_comment_runs_to_end() {
        let spans = spans_of("x = 1;\n/* open\nstill\n");
        assert_eq!(styled(&spans, STYLE_COMMENT), vec![(7, 14), (15, 20)]);
    }

    #[test]
    fn test_two_block_comments_on_one_line() {
        let spans = spans_of("/*a*/ x /*b*/\n");
        assert_eq!(styled(&spans, STYLE_COMMENT), vec![(0, 5), (8, 13)]);
    }

    #[test]
    fn test_non_ascii_offsets_are_characters() {
        let spans = spans_of("x = \"你好\";\n");
        assert_eq!(styled(&spans, STYLE_STRING), vec![(4, 8)]);
    }
}
