//! Quotex Core Library
//!
//! Turns untrusted text into safe pattern text: traditional regex, PCRE,
//! replacement templates and glob patterns. Quotex only builds patterns;
//! matching is left to the engine of your choice.

pub mod compiler;
pub mod error;
pub mod input;
pub mod literal;
pub mod mode;
pub mod table;
pub mod translate;

pub use compiler::{CompileReport, compile_debug, compile_pattern, compile_pattern_bits};
pub use error::{EscapeError, Result};
pub use input::Input;
pub use literal::{LiteralEscaper, escape_literal};
pub use mode::{Dialect, Mode, ModeFlags, PatternMode, Scope};
pub use table::TranslationTable;
