//! Literal escapers for the exclusive modes
//!
//! These do not build a matching pattern. They make a single string safe
//! to pass where some characters would otherwise be interpreted:
//!
//! - [`LiteralEscaper::GetDir`]: glob patterns, where `?` and `*` are
//!   wildcards and `\` escapes.
//! - [`LiteralEscaper::Replace`]: replacement templates, where `&` is the
//!   whole match and `\1`..`\9` are backreferences.

use crate::table::{TranslationTable, getdir_table, replace_table};

/// One of the single-string escapers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralEscaper {
    /// Glob-safe text for directory listings
    GetDir,
    /// Verbatim replacement template
    Replace,
}

impl LiteralEscaper {
    fn table(self) -> &'static TranslationTable {
        match self {
            LiteralEscaper::GetDir => getdir_table(),
            LiteralEscaper::Replace => replace_table(),
        }
    }

    /// Escape `text`
    pub fn escape(self, text: &str) -> String {
        self.table().translate(text)
    }
}

/// Escape `text` with the given escaper
///
/// # Example
/// ```
/// use quotex::{LiteralEscaper, escape_literal};
///
/// assert_eq!(escape_literal("a*b", LiteralEscaper::GetDir), r"a\*b");
/// assert_eq!(escape_literal("salt & pepper", LiteralEscaper::Replace), r"salt \& pepper");
/// ```
pub fn escape_literal(text: &str, escaper: LiteralEscaper) -> String {
    escaper.escape(text)
}
