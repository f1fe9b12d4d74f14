//! renfa compiler: tokenizer, SLR parser, and NFA builder.
//!
//! This crate provides the compilation pipeline for renfa patterns:
//! - `parser` - tokenizer and table-driven shift-reduce parser
//! - `compile` - instruction stream execution, simplification
//! - `diagnostics` - error rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod diagnostics;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

use std::collections::BTreeSet;

pub use compile::{Compiler, DEFAULT_MAX_PATTERN_LEN, Instruction, Operator, compile};
pub use diagnostics::{DiagnosticsPrinter, error_message};
pub use parser::Symbol;

/// Errors that can occur while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The tokenizer met a character outside the pattern alphabet.
    #[error("unknown token at position {position}")]
    UnknownToken { position: usize },

    /// Neither a shift nor a reduce applies to the current lookahead.
    #[error("unexpected {got} at position {position}")]
    ParseError {
        position: usize,
        expected: BTreeSet<Symbol>,
        got: Symbol,
    },

    /// An operator found fewer fragments than it needs.
    #[error("automaton stack underflow in {operator}")]
    StackUnderflow { operator: Operator },

    #[error("pattern is {len} characters long, limit is {limit}")]
    PatternTooLong { len: usize, limit: usize },

    /// The instruction stream left more than one fragment behind.
    #[error("automaton builder finished with {count} fragments")]
    DanglingFragments { count: usize },
}

impl CompileError {
    /// Character offset the error points at, if it points anywhere.
    pub fn position(&self) -> Option<usize> {
        match self {
            CompileError::UnknownToken { position } | CompileError::ParseError { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }

    /// Defects in the compiler itself rather than in the user's pattern.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            CompileError::StackUnderflow { .. } | CompileError::DanglingFragments { .. }
        )
    }
}

/// Result type for compile operations.
pub type Result<T> = std::result::Result<T, CompileError>;
