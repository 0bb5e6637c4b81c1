//! Translation tables
//!
//! A table maps a token of the raw text to its replacement. Tokens are
//! either two-character escape sequences (`\*`, `\E`, ...) or single
//! characters; at each position the two-character token is tried first so
//! an escape sequence is never split and escaped twice.
//!
//! Tables are pure data. Each one is built on first use behind a
//! [`LazyLock`] and shared for the rest of the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::mode::Dialect;

/// Characters with a meaning in the traditional regex dialect
pub const REGEX_META: [char; 14] = [
    '\\', '*', '.', '^', '$', '|', '(', ')', '+', '[', ']', '?', '{', '}',
];

/// Token to replacement mapping applied in one left-to-right pass
#[derive(Debug, Clone)]
pub struct TranslationTable {
    name: &'static str,
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Create an empty table
    pub fn new(name: &'static str) -> Self {
        TranslationTable {
            name,
            entries: HashMap::new(),
        }
    }

    /// Add a mapping. `token` must be one or two characters long.
    pub fn with(mut self, token: &str, replacement: &str) -> Self {
        debug_assert!(matches!(token.chars().count(), 1 | 2), "bad token {:?}", token);
        self.entries.insert(token.to_string(), replacement.to_string());
        self
    }

    /// Map each of `chars` to itself prefixed with a backslash
    pub fn with_escaped(mut self, chars: &[char]) -> Self {
        for &c in chars {
            self.entries.insert(c.to_string(), format!("\\{}", c));
        }
        self
    }

    /// Table name, for diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the replacement for a token
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Number of mappings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no mappings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the table to `text`.
    pub fn translate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        let mut rest = text;

        while let Some(first) = rest.chars().next() {
            let one = first.len_utf8();
            let two = rest[one..].chars().next().map(|c| one + c.len_utf8());

            if let Some(two) = two {
                if let Some(replacement) = self.get(&rest[..two]) {
                    out.push_str(replacement);
                    rest = &rest[two..];
                    continue;
                }
            }

            match self.get(&rest[..one]) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(first),
            }
            rest = &rest[one..];
        }

        out
    }
}

static REGEX_PLAIN: LazyLock<TranslationTable> = LazyLock::new(|| {
    log::trace!("building regex table");
    TranslationTable::new("regex")
        .with_escaped(&REGEX_META)
        .with(r"\<", r"\\<")
        .with(r"\>", r"\\>")
});

// Wildcards become `.`, which does not match a newline in either dialect.
static REGEX_WILDCARD: LazyLock<TranslationTable> = LazyLock::new(|| {
    log::trace!("building regex wildcard table");
    TranslationTable::new("regex-wildcard")
        .with_escaped(&REGEX_META)
        .with("*", ".*")
        .with("?", ".")
        .with(r"\\", r"\\")
        .with(r"\*", r"\*")
        .with(r"\?", r"\?")
        .with(r"\<", r"\\<")
        .with(r"\>", r"\\>")
});

static PCRE_PLAIN: LazyLock<TranslationTable> = LazyLock::new(|| {
    log::trace!("building pcre table");
    TranslationTable::new("pcre").with(r"\E", r"\E\\E\Q")
});

static PCRE_WILDCARD: LazyLock<TranslationTable> = LazyLock::new(|| {
    log::trace!("building pcre wildcard table");
    // Backslashes leave the quote so they can never pair with a later `E`.
    TranslationTable::new("pcre-wildcard")
        .with(r"\E", r"\E\\E\Q")
        .with(r"\\", r"\E\\\Q")
        .with(r"\", r"\E\\\Q")
        .with(r"\*", "*")
        .with(r"\?", "?")
        .with("*", r"\E.*\Q")
        .with("?", r"\E.\Q")
});

static GETDIR: LazyLock<TranslationTable> = LazyLock::new(|| {
    log::trace!("building getdir table");
    TranslationTable::new("getdir")
        .with_escaped(&['\\', '?', '*'])
        .with(r"\\", r"\\\\")
        .with(r"\?", r"\\\?")
        .with(r"\*", r"\\\*")
});

static REPLACE: LazyLock<TranslationTable> = LazyLock::new(|| {
    log::trace!("building replace table");
    let mut table = TranslationTable::new("replace")
        .with_escaped(&['\\', '&'])
        .with(r"\\", r"\\\\")
        .with(r"\&", r"\\\&");
    for digit in '0'..='9' {
        table = table.with(&format!("\\{}", digit), &format!("\\\\{}", digit));
    }
    table
});

/// The shared table for a dialect and wildcard setting
pub fn pattern_table(dialect: Dialect, wildcard: bool) -> &'static TranslationTable {
    match (dialect, wildcard) {
        (Dialect::Regex, false) => &*REGEX_PLAIN,
        (Dialect::Regex, true) => &*REGEX_WILDCARD,
        (Dialect::Pcre, false) => &*PCRE_PLAIN,
        (Dialect::Pcre, true) => &*PCRE_WILDCARD,
    }
}

/// The shared table for glob-safe directory patterns
pub fn getdir_table() -> &'static TranslationTable {
    &GETDIR
}

/// The shared table for replacement templates
pub fn replace_table() -> &'static TranslationTable {
    &REPLACE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_before_single() {
        let table = TranslationTable::new("t").with("a", "1").with("ab", "2");
        assert_eq!(table.translate("abab a b"), "22 1 b");
    }

    #[test]
    fn test_unmapped_passthrough() {
        let table = TranslationTable::new("t").with("x", "y");
        assert_eq!(table.translate("héllo wörld"), "héllo wörld");
        assert_eq!(table.translate(""), "");
    }

    #[test]
    fn test_multibyte_pairs() {
        let table = TranslationTable::new("t").with("éx", "!");
        assert_eq!(table.translate("aéxé"), "a!é");
    }

    #[test]
    fn test_regex_plain() {
        let table = pattern_table(Dialect::Regex, false);
        assert_eq!(table.translate("(foo|bar)"), r"\(foo\|bar\)");
        assert_eq!(table.translate("a.b*c?"), r"a\.b\*c\?");
        assert_eq!(table.translate(r"\<w\>"), r"\\<w\\>");
        assert_eq!(table.translate(r"c:\dir"), r"c:\\dir");
    }

    #[test]
    fn test_regex_wildcard() {
        let table = pattern_table(Dialect::Regex, true);
        assert_eq!(table.translate("bla*"), "bla.*");
        assert_eq!(table.translate("a?c"), "a.c");
        assert_eq!(table.translate(r"a\*b\?"), r"a\*b\?");
        assert_eq!(table.translate(r"a\\*"), r"a\\.*");
        assert_eq!(table.translate("1+1"), r"1\+1");
    }

    #[test]
    fn test_pcre_plain() {
        let table = pattern_table(Dialect::Pcre, false);
        assert_eq!(table.translate("(foo|bar)"), "(foo|bar)");
        assert_eq!(table.translate(r"a\Eb"), r"a\E\\E\Qb");
    }

    #[test]
    fn test_pcre_wildcard() {
        let table = pattern_table(Dialect::Pcre, true);
        assert_eq!(table.translate("a*b?"), r"a\E.*\Qb\E.\Q");
        assert_eq!(table.translate(r"a\*b\?"), "a*b?");
        assert_eq!(table.translate(r"\\E"), r"\E\\\QE");
        assert_eq!(table.translate(r"x\y"), r"x\E\\\Qy");
    }

    #[test]
    fn test_getdir() {
        let table = getdir_table();
        assert_eq!(table.translate("a?b*"), r"a\?b\*");
        assert_eq!(table.translate(r"a\?"), r"a\\\?");
        assert_eq!(table.translate(r"c:\dir"), r"c:\\dir");
    }

    #[test]
    fn test_replace() {
        let table = replace_table();
        assert_eq!(table.translate(r"\1&\2&\3"), r"\\1\&\\2\&\\3");
        assert_eq!(table.translate("fish & chips"), r"fish \& chips");
        assert_eq!(table.translate("plain text"), "plain text");
        assert_eq!(table.len(), 14);
    }

    #[test]
    fn test_tables_are_shared() {
        let a = pattern_table(Dialect::Pcre, true);
        let b = pattern_table(Dialect::Pcre, true);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.name(), "pcre-wildcard");
    }
}
