//! renfa: restricted regular expressions compiled to NFAs.
//!
//! Patterns use literal symbols `[a-zA-Z0-9]`, union `+`, concatenation,
//! Kleene star `*`, parentheses and `^`/`λ` for the empty string.
//!
//! # Example
//!
//! ```
//! use renfa_lib::Automaton;
//!
//! let automaton = Automaton::new("(a+b)*c", true).expect("valid pattern");
//! assert!(automaton.matches("abc").expect("literal candidate"));
//! println!("{}", automaton.dot());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod automaton;
mod cache;

#[cfg(test)]
mod cache_tests;

pub use automaton::Automaton;
pub use cache::{CompileCache, DEFAULT_CACHE_CAPACITY};

pub use renfa_compiler::{CompileError, Compiler, error_message};
pub use renfa_core::{Colors, Edge, Label, Nfa, StateId};
pub use renfa_vm::{MatchLimits, RuntimeError};

/// Errors from compiling a pattern or matching a candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Human-readable rendering against the text that caused the error.
    pub fn message(&self, source: &str) -> String {
        match self {
            Error::Compile(err) => error_message(err, source),
            Error::Runtime(err) => format!("error: {err}"),
        }
    }
}

/// Result type for renfa operations.
pub type Result<T> = std::result::Result<T, Error>;
