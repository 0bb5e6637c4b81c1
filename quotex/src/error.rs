//! Error types for the pattern escaper
//!
//! This module provides error handling using the `thiserror` crate.
//! Every error here describes a misuse of the API and is raised before
//! any part of a pattern is built.

use thiserror::Error;

/// The main error type for pattern compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    /// An exclusive literal mode was combined with other flags
    #[error("{flag} must be passed exclusively")]
    InvalidModeCombination {
        /// Name of the exclusive flag that was combined
        flag: &'static str,
    },

    /// An exclusive literal mode was given a list instead of a single string
    #[error("{flag} requires a single string, not a list")]
    InvalidInputType {
        /// Name of the exclusive flag that rejected the input
        flag: &'static str,
    },

    /// A raw mode value carried bits outside the known flag set
    #[error("invalid mode value {0:#x}: unknown flag bits")]
    InvalidModeType(u32),

    /// A flag name could not be parsed
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
}

/// Result type alias for escaping operations
pub type Result<T> = std::result::Result<T, EscapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_combination_display() {
        let err = EscapeError::InvalidModeCombination { flag: "GETDIR" };
        assert_eq!(err.to_string(), "GETDIR must be passed exclusively");
    }

    #[test]
    fn test_input_type_display() {
        let err = EscapeError::InvalidInputType { flag: "REPLACE" };
        assert_eq!(
            err.to_string(),
            "REPLACE requires a single string, not a list"
        );
    }

    #[test]
    fn test_mode_type_display() {
        let err = EscapeError::InvalidModeType(0x1000);
        assert_eq!(err.to_string(), "invalid mode value 0x1000: unknown flag bits");
    }

    #[test]
    fn test_unknown_flag_display() {
        let err = EscapeError::UnknownFlag("fuzzy".to_string());
        assert_eq!(err.to_string(), "unknown flag 'fuzzy'");
    }
}
