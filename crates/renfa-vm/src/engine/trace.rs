//! Tracing hooks for the matcher.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so the
//! untraced path compiles to plain simulation. `PrintTracer` renders every
//! step as a line of text.

use std::collections::BTreeSet;

use renfa_core::{Colors, StateId};

/// Instrumentation points of a match run.
pub trait Tracer {
    /// Called with the closure of the initial state.
    fn trace_start(&mut self, states: &BTreeSet<StateId>);

    /// Called after consuming the character at `position`.
    fn trace_step(&mut self, position: usize, ch: char, states: &BTreeSet<StateId>);

    /// Called once with the verdict and the last state set.
    fn trace_finish(&mut self, accepted: bool, states: &BTreeSet<StateId>);
}

pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _states: &BTreeSet<StateId>) {}

    #[inline(always)]
    fn trace_step(&mut self, _position: usize, _ch: char, _states: &BTreeSet<StateId>) {}

    #[inline(always)]
    fn trace_finish(&mut self, _accepted: bool, _states: &BTreeSet<StateId>) {}
}

/// Collects a human-readable trace.
///
/// ```text
///       {q0 q1}
/// 0  a  {q1 q2}
///   accepted
/// ```
pub struct PrintTracer {
    colors: Colors,
    finals: BTreeSet<StateId>,
    lines: Vec<String>,
}

impl PrintTracer {
    /// `finals` are highlighted in state sets.
    pub fn new(finals: &BTreeSet<StateId>, colors: Colors) -> Self {
        Self {
            colors,
            finals: finals.clone(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn format_states(&self, states: &BTreeSet<StateId>) -> String {
        let c = &self.colors;
        if states.is_empty() {
            return format!("{}{{}}{}", c.dim, c.reset);
        }
        let names: Vec<String> = states
            .iter()
            .map(|q| {
                let color = if self.finals.contains(q) { c.green } else { c.blue };
                format!("{color}q{q}{}", c.reset)
            })
            .collect();
        format!("{}{{{}{}{}}}{}", c.dim, c.reset, names.join(" "), c.dim, c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, states: &BTreeSet<StateId>) {
        let line = format!("      {}", self.format_states(states));
        self.lines.push(line);
    }

    fn trace_step(&mut self, position: usize, ch: char, states: &BTreeSet<StateId>) {
        let c = self.colors;
        let line = format!(
            "{}{position:<2}{} {ch}  {}",
            c.dim,
            c.reset,
            self.format_states(states)
        );
        self.lines.push(line);
    }

    fn trace_finish(&mut self, accepted: bool, _states: &BTreeSet<StateId>) {
        let c = self.colors;
        let line = if accepted {
            format!("  {}accepted{}", c.green, c.reset)
        } else {
            format!("  {}rejected{}", c.red, c.reset)
        };
        self.lines.push(line);
    }
}
