//! Line ending helpers.
//!
//! Documents are stored internally with LF (`'\n'`) newlines. When a file
//! using CRLF (`"\r\n"`) is opened, the content is normalized on load; the
//! detected line ending is remembered so the file can be written back in its
//! original convention.

/// The newline sequence a document prefers when serialized for saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending of a source text.
    ///
    /// Policy: any CRLF in the input selects [`LineEnding::Crlf`], otherwise
    /// [`LineEnding::Lf`].
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Normalize a source text to LF newlines for in-memory storage.
    pub fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n")
    }

    /// Convert an LF-normalized text to this line ending for saving.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}
