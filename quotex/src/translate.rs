//! Per-item translation into a dialect
//!
//! Each literal item is translated on its own. Joining the items and
//! anchoring the result is left to the compiler.

use crate::mode::{Dialect, PatternMode};
use crate::table::pattern_table;

/// Translate one literal item for `mode`.
///
/// For the PCRE dialect the result is meant to sit between `\Q` and `\E`.
/// For the traditional dialect it is a complete sub-pattern, with letters
/// expanded to case classes when the mode is case insensitive.
pub fn translate_item(item: &str, mode: &PatternMode) -> String {
    let translated = pattern_table(mode.dialect, mode.wildcard).translate(item);

    // PCRE handles case with an inline flag instead.
    if mode.dialect == Dialect::Regex && mode.case_insensitive {
        fold_case(&translated)
    } else {
        translated
    }
}

/// Expand every ASCII letter into a two-case bracket class.
///
/// Must run after escaping: the brackets it inserts are syntax.
///
/// ```
/// assert_eq!(quotex::translate::fold_case("ab.1"), "[Aa][Bb].1");
/// ```
pub fn fold_case(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 4);
    for c in pattern.chars() {
        if c.is_ascii_alphabetic() {
            out.push('[');
            out.push(c.to_ascii_uppercase());
            out.push(c.to_ascii_lowercase());
            out.push(']');
        } else {
            out.push(c);
        }
    }
    out
}
