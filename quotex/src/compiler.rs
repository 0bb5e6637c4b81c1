//! Pattern compilation
//!
//! Validates the mode, normalizes the input, translates each item and
//! assembles the final pattern:
//!
//! | Dialect | Any      | Exact      | Word          |
//! |---------|----------|------------|---------------|
//! | Regex   | `(a\|b)` | `^(a\|b)$` | `\<(a\|b)\>`  |
//! | PCRE    | `(\Qa\E\|\Qb\E)` | `^(...)\z` | `\b(...)\b` |
//!
//! PCRE's `$` also matches before a final newline, so Exact ends with `\z`.

use crate::error::Result;
use crate::input::Input;
use crate::literal::LiteralEscaper;
use crate::mode::{Dialect, Mode, ModeFlags, PatternMode, Scope};
use crate::translate::translate_item;

/// Compile `input` into a pattern for `mode`.
///
/// Returns `Ok(None)` when the input normalizes to no items at all, for
/// example an empty list.
///
/// # Example
/// ```
/// use quotex::{ModeFlags, compile_pattern};
///
/// let pattern = compile_pattern("(foo|bar)", ModeFlags::EXACT).unwrap();
/// assert_eq!(pattern.as_deref(), Some(r"^(\(foo\|bar\))$"));
///
/// let none = compile_pattern(" , ,,,", ModeFlags::LIST).unwrap();
/// assert_eq!(none, None);
/// ```
pub fn compile_pattern(input: impl Into<Input>, mode: ModeFlags) -> Result<Option<String>> {
    let input = input.into();
    let mode = Mode::resolve(mode, &input)?;
    Ok(compile_resolved(&input, mode).output)
}

/// Like [`compile_pattern`], with the mode given as raw flag bits.
pub fn compile_pattern_bits(input: impl Into<Input>, bits: u32) -> Result<Option<String>> {
    compile_pattern(input, ModeFlags::from_bits(bits)?)
}

/// Compile with the intermediate steps kept for inspection
pub fn compile_debug(input: impl Into<Input>, mode: ModeFlags) -> Result<CompileReport> {
    let input = input.into();
    let resolved = Mode::resolve(mode, &input)?;
    let compiled = compile_resolved(&input, resolved);

    Ok(CompileReport {
        input,
        flags: mode,
        mode: resolved,
        items: compiled.items,
        translated: compiled.translated,
        output: compiled.output,
    })
}

/// Result of a compilation with debug information
#[derive(Debug, Clone)]
pub struct CompileReport {
    /// The original input
    pub input: Input,
    /// The flags as given
    pub flags: ModeFlags,
    /// The validated mode
    pub mode: Mode,
    /// Normalized literal items
    pub items: Vec<String>,
    /// Items after translation, before joining
    pub translated: Vec<String>,
    /// The final pattern, `None` when there was nothing to match
    pub output: Option<String>,
}

impl CompileReport {
    /// Print a formatted report of the compilation
    pub fn report(&self) {
        println!("Compilation Report");
        println!("==================");
        println!("Input:      {:?}", self.input);
        println!("Flags:      {}", self.flags);
        println!("Mode:       {:?}", self.mode);
        println!("Items:      {:?}", self.items);
        println!("Translated: {:?}", self.translated);
        match &self.output {
            Some(output) => println!("Output:     {}", output),
            None => println!("Output:     (no pattern)"),
        }
    }
}

struct Compiled {
    items: Vec<String>,
    translated: Vec<String>,
    output: Option<String>,
}

fn compile_resolved(input: &Input, mode: Mode) -> Compiled {
    let pattern = match mode {
        Mode::GetDir | Mode::Replace => {
            let escaper = if mode == Mode::GetDir {
                LiteralEscaper::GetDir
            } else {
                LiteralEscaper::Replace
            };
            // Resolution guarantees a single string here.
            let text = input.as_single().unwrap_or_default();
            let escaped = escaper.escape(text);
            log::debug!("{:?} escaped {:?} -> {:?}", escaper, text, escaped);
            return Compiled {
                items: vec![text.to_string()],
                translated: vec![escaped.clone()],
                output: Some(escaped),
            };
        }
        Mode::Pattern(pattern) => pattern,
    };

    let items = input.items(pattern.list);
    if items.is_empty() {
        log::debug!("no items in {:?}, nothing to compile", input);
        return Compiled {
            items,
            translated: Vec::new(),
            output: None,
        };
    }

    let translated: Vec<String> = items
        .iter()
        .map(|item| translate_item(item, &pattern))
        .collect();
    let output = assemble(&translated, &pattern);
    log::debug!("compiled {} item(s) -> {:?}", items.len(), output);

    Compiled {
        items,
        translated,
        output: Some(output),
    }
}

/// Join translated items and apply anchors.
fn assemble(translated: &[String], mode: &PatternMode) -> String {
    match mode.dialect {
        Dialect::Regex => {
            let (pre, post) = match mode.scope {
                Scope::Exact => ("^", "$"),
                Scope::Word => (r"\<", r"\>"),
                Scope::Any => ("", ""),
            };
            format!("{}({}){}", pre, translated.join("|"), post)
        }
        Dialect::Pcre => {
            let (pre, post) = match mode.scope {
                Scope::Exact => ("^", r"\z"),
                Scope::Word => (r"\b", r"\b"),
                Scope::Any => ("", ""),
            };
            let flags = if mode.case_insensitive { "(?i)" } else { "" };
            format!(
                r"{}({}\Q{}\E){}",
                pre,
                flags,
                translated.join(r"\E|\Q"),
                post
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EscapeError;

    fn compile(input: impl Into<Input>, mode: ModeFlags) -> String {
        compile_pattern(input, mode).unwrap().unwrap()
    }

    #[test]
    fn test_default_regex() {
        assert_eq!(compile("(foo|bar)", ModeFlags::empty()), r"(\(foo\|bar\))");
    }

    #[test]
    fn test_pcre() {
        assert_eq!(compile("(foo|bar)", ModeFlags::PCRE), r"(\Q(foo|bar)\E)");
    }

    #[test]
    fn test_scopes() {
        assert_eq!(compile("x", ModeFlags::EXACT), "^(x)$");
        assert_eq!(compile("x", ModeFlags::WORD), r"\<(x)\>");
        assert_eq!(compile("x", ModeFlags::ANY), "(x)");
        assert_eq!(compile("x", ModeFlags::PCRE | ModeFlags::EXACT), r"^(\Qx\E)\z");
        assert_eq!(compile("x", ModeFlags::PCRE | ModeFlags::WORD), r"\b(\Qx\E)\b");
    }

    #[test]
    fn test_list_of_commas_is_sentinel() {
        assert_eq!(compile_pattern(vec![",", ","], ModeFlags::empty()).unwrap(), None);
        assert_eq!(compile(vec!["a, b", "c"], ModeFlags::EXACT), "^(a|b|c)$");
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(
            compile("bla*", ModeFlags::WILDCARD | ModeFlags::EXACT),
            "^(bla.*)$"
        );
        assert_eq!(
            compile("bla*", ModeFlags::WILDCARD | ModeFlags::PCRE),
            r"(\Qbla\E.*\Q\E)"
        );
    }

    #[test]
    fn test_list_nocase_word() {
        assert_eq!(
            compile(
                "table, chair",
                ModeFlags::LIST | ModeFlags::WORD | ModeFlags::NOCASE
            ),
            r"\<([Tt][Aa][Bb][Ll][Ee]|[Cc][Hh][Aa][Ii][Rr])\>"
        );
        assert_eq!(
            compile(
                "table, chair",
                ModeFlags::LIST | ModeFlags::PCRE | ModeFlags::NOCASE
            ),
            r"((?i)\Qtable\E|\Qchair\E)"
        );
    }

    #[test]
    fn test_list_input() {
        assert_eq!(compile(vec!["a.b", "c"], ModeFlags::empty()), r"(a\.b|c)");
    }

    #[test]
    fn test_empty_single_without_list() {
        assert_eq!(compile("", ModeFlags::empty()), "()");
    }

    #[test]
    fn test_sentinel() {
        for raw in ["", " ", " , ,,,"] {
            assert_eq!(compile_pattern(raw, ModeFlags::LIST).unwrap(), None);
        }
        let empty: Vec<String> = Vec::new();
        assert_eq!(compile_pattern(empty, ModeFlags::PCRE).unwrap(), None);
    }

    #[test]
    fn test_exclusive_modes() {
        assert_eq!(compile("a*b", ModeFlags::GETDIR), r"a\*b");
        assert_eq!(compile(r"\1&", ModeFlags::REPLACE), r"\\1\&");
        // The list flag has no effect on exclusive modes, it is rejected.
        assert_eq!(
            compile_pattern("a,b", ModeFlags::GETDIR | ModeFlags::LIST),
            Err(EscapeError::InvalidModeCombination { flag: "GETDIR" })
        );
        assert_eq!(
            compile_pattern(vec!["a", "b"], ModeFlags::GETDIR),
            Err(EscapeError::InvalidInputType { flag: "GETDIR" })
        );
    }

    #[test]
    fn test_bits() {
        assert_eq!(
            compile_pattern_bits("x", 2 | 256).unwrap().as_deref(),
            Some(r"^(\Qx\E)\z")
        );
        assert_eq!(
            compile_pattern_bits("x", 1 << 20),
            Err(EscapeError::InvalidModeType(1 << 20))
        );
    }

    #[test]
    fn test_debug_report() {
        let report = compile_debug("a, b", ModeFlags::LIST | ModeFlags::EXACT).unwrap();
        assert_eq!(report.items, vec!["a", "b"]);
        assert_eq!(report.translated, vec!["a", "b"]);
        assert_eq!(report.output.as_deref(), Some("^(a|b)$"));
        assert_eq!(report.flags.to_string(), "EXACT|LIST");
    }
}
