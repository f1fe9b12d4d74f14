use renfa_compiler::Compiler;
use renfa_compiler::parser::check_literals;
use renfa_core::{Colors, Nfa, dot, dump};
use renfa_vm::{MatchLimits, Matcher, PrintTracer};

use crate::Result;

/// A compiled pattern, ready to test candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    pattern: String,
    optimized: bool,
    nfa: Nfa,
    limits: MatchLimits,
}

impl Automaton {
    /// Compile `pattern` with default limits.
    pub fn new(pattern: &str, optimize: bool) -> Result<Self> {
        Self::with_compiler(pattern, Compiler::new().optimize(optimize))
    }

    pub fn with_compiler(pattern: &str, compiler: Compiler) -> Result<Self> {
        let nfa = compiler.compile(pattern)?;
        log::debug!(
            "compiled {pattern:?}: {} states, {} edges, {} finals",
            nfa.state_count(),
            nfa.edge_count(),
            nfa.finals().len()
        );
        Ok(Self {
            pattern: pattern.to_owned(),
            optimized: compiler.is_optimizing(),
            nfa,
            limits: MatchLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: MatchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_optimized(&self) -> bool {
        self.optimized
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// Whether `candidate` is in the pattern's language.
    ///
    /// Candidates may only contain literal symbols; anything else is an
    /// unknown token, reported before the automaton runs.
    pub fn matches(&self, candidate: &str) -> Result<bool> {
        check_literals(candidate)?;
        let accepted = Matcher::new(&self.nfa)
            .with_limits(self.limits)
            .run(candidate)?;
        Ok(accepted)
    }

    /// Like [`matches`](Self::matches), recording every step in `tracer`.
    pub fn trace(&self, candidate: &str, tracer: &mut PrintTracer) -> Result<bool> {
        check_literals(candidate)?;
        let accepted = Matcher::new(&self.nfa)
            .with_limits(self.limits)
            .run_with(candidate, tracer)?;
        Ok(accepted)
    }

    pub fn dump(&self, colors: Colors) -> String {
        dump(&self.nfa, colors)
    }

    /// Graph description for diagram renderers.
    pub fn dot(&self) -> String {
        dot(&self.nfa)
    }
}
