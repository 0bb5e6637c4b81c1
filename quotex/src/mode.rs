//! Mode flags and their validation
//!
//! A [`ModeFlags`] value is a plain bitset, combinable with `|`. Before any
//! text is touched it is resolved into a [`Mode`], which rejects the
//! illegal combinations and applies the defaults for unset option groups.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::{EscapeError, Result};
use crate::input::Input;

/// Bitset of escaping options.
///
/// The bit values are stable and may be stored or exchanged as integers
/// (see [`ModeFlags::from_bits`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModeFlags(u32);

impl ModeFlags {
    /// Traditional regex dialect (default)
    pub const REGEX: ModeFlags = ModeFlags(1 << 0);
    /// PCRE dialect
    pub const PCRE: ModeFlags = ModeFlags(1 << 1);
    /// Glob-safe literal for directory listings. Exclusive.
    pub const GETDIR: ModeFlags = ModeFlags(1 << 2);
    /// Match the text anywhere (default)
    pub const ANY: ModeFlags = ModeFlags(1 << 3);
    /// Match the text as a whole word
    pub const WORD: ModeFlags = ModeFlags(1 << 4);
    /// Case sensitive (default)
    pub const CASE: ModeFlags = ModeFlags(1 << 5);
    /// Case insensitive
    pub const NOCASE: ModeFlags = ModeFlags(1 << 6);
    /// Translate `?` and `*` wildcards
    pub const WILDCARD: ModeFlags = ModeFlags(1 << 7);
    /// Match the whole string exactly
    pub const EXACT: ModeFlags = ModeFlags(1 << 8);
    /// Literal replacement template. Exclusive.
    pub const REPLACE: ModeFlags = ModeFlags(1 << 9);
    /// Treat a string input as a comma separated list
    pub const LIST: ModeFlags = ModeFlags(1 << 10);

    const ALL_BITS: u32 = (1 << 11) - 1;

    const NAMES: [(&'static str, ModeFlags); 11] = [
        ("REGEX", Self::REGEX),
        ("PCRE", Self::PCRE),
        ("GETDIR", Self::GETDIR),
        ("ANY", Self::ANY),
        ("WORD", Self::WORD),
        ("CASE", Self::CASE),
        ("NOCASE", Self::NOCASE),
        ("WILDCARD", Self::WILDCARD),
        ("EXACT", Self::EXACT),
        ("REPLACE", Self::REPLACE),
        ("LIST", Self::LIST),
    ];

    /// No flags set; every option group takes its default.
    pub const fn empty() -> Self {
        ModeFlags(0)
    }

    /// Build flags from a raw integer, rejecting unknown bits.
    pub fn from_bits(bits: u32) -> Result<Self> {
        if bits & !Self::ALL_BITS != 0 {
            return Err(EscapeError::InvalidModeType(bits));
        }
        Ok(ModeFlags(bits))
    }

    /// Get raw bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Check whether every bit of `other` is set.
    #[inline]
    pub const fn contains(&self, other: ModeFlags) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Check whether no flag is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ModeFlags {
    type Output = ModeFlags;

    fn bitor(self, rhs: ModeFlags) -> ModeFlags {
        ModeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModeFlags {
    fn bitor_assign(&mut self, rhs: ModeFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ModeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let mut first = true;
        for (name, flag) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Parses names such as `"pcre|exact"` or `"list, nocase"`.
impl FromStr for ModeFlags {
    type Err = EscapeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut flags = ModeFlags::empty();
        for name in s.split(['|', ',']).map(str::trim).filter(|n| !n.is_empty()) {
            let flag = Self::NAMES
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
                .map(|(_, flag)| *flag)
                .ok_or_else(|| EscapeError::UnknownFlag(name.to_string()))?;
            flags |= flag;
        }
        Ok(flags)
    }
}

/// Target regex flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Traditional regex: `\<`/`\>` word anchors, no inline flags
    Regex,
    /// PCRE: `\Q...\E` quoting and `(?i)`
    Pcre,
}

/// How tightly the pattern is anchored to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Anywhere in the subject
    Any,
    /// The whole subject
    Exact,
    /// As a word
    Word,
}

/// Options for building a regex or PCRE pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMode {
    pub dialect: Dialect,
    pub scope: Scope,
    pub case_insensitive: bool,
    pub list: bool,
    pub wildcard: bool,
}

/// A validated mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Escape glob wildcards for directory listings
    GetDir,
    /// Escape a replacement template
    Replace,
    /// Build a matching pattern
    Pattern(PatternMode),
}

impl Mode {
    /// Validate `flags` against `input` and apply defaults.
    ///
    /// Over-specified option groups resolve by precedence: PCRE over
    /// REGEX, EXACT over WORD over ANY, NOCASE over CASE.
    pub fn resolve(flags: ModeFlags, input: &Input) -> Result<Mode> {
        for (flag, name, mode) in [
            (ModeFlags::GETDIR, "GETDIR", Mode::GetDir),
            (ModeFlags::REPLACE, "REPLACE", Mode::Replace),
        ] {
            if flags.contains(flag) {
                if flags != flag {
                    return Err(EscapeError::InvalidModeCombination { flag: name });
                }
                if input.is_list() {
                    return Err(EscapeError::InvalidInputType { flag: name });
                }
                return Ok(mode);
            }
        }

        let dialect = if flags.contains(ModeFlags::PCRE) {
            Dialect::Pcre
        } else {
            Dialect::Regex
        };
        let scope = if flags.contains(ModeFlags::EXACT) {
            Scope::Exact
        } else if flags.contains(ModeFlags::WORD) {
            Scope::Word
        } else {
            Scope::Any
        };

        Ok(Mode::Pattern(PatternMode {
            dialect,
            scope,
            case_insensitive: flags.contains(ModeFlags::NOCASE),
            list: flags.contains(ModeFlags::LIST) || input.is_list(),
            wildcard: flags.contains(ModeFlags::WILDCARD),
        }))
    }
}
