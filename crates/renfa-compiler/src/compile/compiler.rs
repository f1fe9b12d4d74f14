//! Compile options and the end-to-end pipeline.

use renfa_core::Nfa;

use super::{build, simplify};
use crate::parser::parse;
use crate::{CompileError, Result};

/// Default cap on pattern length, in characters.
pub const DEFAULT_MAX_PATTERN_LEN: usize = 1024;

/// Compile options.
///
/// ```
/// use renfa_compiler::{CompileError, Compiler};
///
/// let compiler = Compiler::new().optimize(true);
/// let nfa = compiler.compile("(a+b)*c").expect("valid pattern");
/// assert_eq!(nfa.initial(), 0);
/// assert_eq!(nfa.finals().len(), 1);
///
/// let short = compiler.max_pattern_len(Some(2));
/// assert_eq!(
///     short.compile("abc"),
///     Err(CompileError::PatternTooLong { len: 3, limit: 2 })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compiler {
    optimize: bool,
    max_pattern_len: Option<usize>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            optimize: false,
            max_pattern_len: Some(DEFAULT_MAX_PATTERN_LEN),
        }
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elide boundary states during construction and simplify afterwards.
    pub fn optimize(mut self, value: bool) -> Self {
        self.optimize = value;
        self
    }

    /// Reject longer patterns up front. `None` disables the check.
    pub fn max_pattern_len(mut self, limit: Option<usize>) -> Self {
        self.max_pattern_len = limit;
        self
    }

    pub fn is_optimizing(&self) -> bool {
        self.optimize
    }

    pub fn get_max_pattern_len(&self) -> Option<usize> {
        self.max_pattern_len
    }

    /// Tokenize, parse, build, optionally simplify, and compact.
    pub fn compile(&self, pattern: &str) -> Result<Nfa> {
        self.run(pattern).inspect_err(|err| {
            if err.is_internal() {
                log::error!("internal compiler error on {pattern:?}: {err}");
            }
        })
    }

    fn run(&self, pattern: &str) -> Result<Nfa> {
        if let Some(limit) = self.max_pattern_len {
            let len = pattern.chars().count();
            if len > limit {
                return Err(CompileError::PatternTooLong { len, limit });
            }
        }

        let code = parse(pattern)?;
        let mut nfa = build(&code, self.optimize)?;
        if self.optimize {
            simplify(&mut nfa);
        }
        nfa.compact();
        Ok(nfa)
    }
}

/// Compile with default options.
pub fn compile(pattern: &str, optimize: bool) -> Result<Nfa> {
    Compiler::new().optimize(optimize).compile(pattern)
}
