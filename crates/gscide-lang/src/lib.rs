#![warn(missing_docs)]
//! `gscide-lang` - data-driven GSC language tables for the `gscide` kernel.
//!
//! This crate intentionally stays lightweight and does **not** depend on any
//! parsing or highlighting systems. It provides the raw language data (keyword
//! tables, comment tokens, bracket pairs, file extension, new-file template)
//! that the kernel and its highlighting/deployment companions configure
//! themselves from.

/// Control-flow and declaration keywords of the GSC language.
pub const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue", "return",
    "wait", "waittill", "endon", "notify", "thread", "true", "false", "undefined", "function",
];

/// Builtin identifiers and engine entry points commonly used in scripts.
pub const BUILTINS: &[&str] = &[
    "self",
    "level",
    "game",
    "iprintln",
    "iprintlnbold",
    "setdvar",
    "getdvar",
    "precachemodel",
    "precacheshader",
    "spawn",
    "spawnstruct",
    "getent",
    "getentarray",
    "distance",
    "vectornormalize",
    "angles_to_forward",
    "playfx",
    "playsound",
    "playsoundatpos",
    "earthquake",
    "radiusdamage",
];

/// The file extension (without the dot) used for deployed scripts.
pub const SCRIPT_EXTENSION: &str = "gsc";

/// Comment tokens for GSC (C-style).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentTokens {
    /// Line comment token.
    pub line: &'static str,
    /// Block comment start token.
    pub block_start: &'static str,
    /// Block comment end token.
    pub block_end: &'static str,
}

/// The comment tokens GSC uses.
pub const COMMENTS: CommentTokens = CommentTokens {
    line: "//",
    block_start: "/*",
    block_end: "*/",
};

/// Returns `true` for the three opening brackets `{`, `(`, `[`.
pub fn is_opening_bracket(ch: char) -> bool {
    matches!(ch, '{' | '(' | '[')
}

/// Returns `true` for the three closing brackets `}`, `)`, `]`.
pub fn is_closing_bracket(ch: char) -> bool {
    matches!(ch, '}' | ')' | ']')
}

/// Maps a closing bracket to the opener it pairs with.
///
/// Returns `None` for any character that is not a closing bracket.
pub fn matching_opener(closer: char) -> Option<char> {
    match closer {
        '}' => Some('{'),
        ')' => Some('('),
        ']' => Some('['),
        _ => None,
    }
}

/// The template inserted into a freshly created script tab.
pub fn default_template() -> &'static str {
    "// GSC IDE - Plutonium Script\n\
     // Game: Black Ops 2 (T6)\n\
     // Mode: Multiplayer/Zombies\n\
     \n\
     #include maps\\mp\\_utility;\n\
     #include common_scripts\\utility;\n\
     \n\
     init()\n\
     {\n\
     \tlevel thread onPlayerConnect();\n\
     }\n\
     \n\
     onPlayerConnect()\n\
     {\n\
     \tfor(;;)\n\
     \t{\n\
     \t\tlevel waittill(\"connected\", player);\n\
     \t\tplayer thread onPlayerSpawned();\n\
     \t}\n\
     }\n\
     \n\
     onPlayerSpawned()\n\
     {\n\
     \tself endon(\"disconnect\");\n\
     \t\n\
     \tfor(;;)\n\
     \t{\n\
     \t\tself waittill(\"spawned_player\");\n\
     \t\tself iprintlnbold(\"^2Welcome! ^7Script loaded via GSC IDE\");\n\
     \t}\n\
     }\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_pairing() {
        assert_eq!(matching_opener('}'), Some('{'));
        assert_eq!(matching_opener(')'), Some('('));
        assert_eq!(matching_opener(']'), Some('['));
        assert_eq!(matching_opener('{'), None);
        assert_eq!(matching_opener('x'), None);

        for ch in ['{', '(', '['] {
            assert!(is_opening_bracket(ch));
            assert!(!is_closing_bracket(ch));
        }
        for ch in ['}', ')', ']'] {
            assert!(is_closing_bracket(ch));
            assert!(!is_opening_bracket(ch));
        }
    }

    #[test]
    fn test_keyword_tables_are_distinct() {
        for kw in KEYWORDS {
            assert!(!BUILTINS.contains(kw), "{kw} listed in both tables");
        }
    }

    #[test]
    fn test_default_template_mentions_entry_point() {
        let template = default_template();
        assert!(template.contains("init()"));
        assert!(template.contains("#include"));
        // The template itself must be structurally clean.
        assert!(template.matches('{').count() == template.matches('}').count());
    }
}
