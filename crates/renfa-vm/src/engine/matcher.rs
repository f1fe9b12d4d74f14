use std::collections::{BTreeSet, HashMap};

use renfa_core::{Edge, Label, Nfa, StateId};

use super::error::RuntimeError;
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchLimits {
    /// Maximum candidate length in characters (default: 4,096).
    pub(crate) max_input_len: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            max_input_len: 4096,
        }
    }
}

impl MatchLimits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum candidate length.
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    pub fn get_max_input_len(&self) -> usize {
        self.max_input_len
    }
}

/// Set of states the automaton may currently be in.
pub type StateSet = BTreeSet<StateId>;

/// Simulates an NFA over input strings.
///
/// Outgoing edges are indexed once on construction, so one matcher can
/// check many candidates against the same automaton.
pub struct Matcher<'n> {
    nfa: &'n Nfa,
    outgoing: HashMap<StateId, Vec<Edge>>,
    limits: MatchLimits,
}

impl<'n> Matcher<'n> {
    pub fn new(nfa: &'n Nfa) -> Self {
        let mut outgoing: HashMap<StateId, Vec<Edge>> = HashMap::new();
        for edge in nfa.edges() {
            outgoing.entry(edge.from).or_default().push(*edge);
        }
        Self {
            nfa,
            outgoing,
            limits: MatchLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: MatchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> MatchLimits {
        self.limits
    }

    /// Whether the automaton accepts `input`.
    pub fn run(&self, input: &str) -> Result<bool, RuntimeError> {
        self.run_with(input, &mut NoopTracer)
    }

    /// Run with a tracer for debugging.
    ///
    /// The tracer is generic, so `NoopTracer` calls are optimized away
    /// while `PrintTracer` calls collect the state sets of every step.
    pub fn run_with<T: Tracer>(&self, input: &str, tracer: &mut T) -> Result<bool, RuntimeError> {
        let len = input.chars().count();
        let limit = self.limits.max_input_len;
        if len > limit {
            return Err(RuntimeError::InputTooLong { len, limit });
        }
        Ok(self.simulate(input, tracer))
    }

    fn simulate<T: Tracer>(&self, input: &str, tracer: &mut T) -> bool {
        let mut current = self.closure(StateSet::from([self.nfa.initial()]));
        tracer.trace_start(&current);

        for (position, ch) in input.chars().enumerate() {
            let next = self.step(&current, ch);
            current = self.closure(next);
            tracer.trace_step(position, ch, &current);
            if current.is_empty() {
                break;
            }
        }

        let accepted = current.iter().any(|&q| self.nfa.is_final(q));
        log::trace!("{input:?}: {}", if accepted { "accepted" } else { "rejected" });
        tracer.trace_finish(accepted, &current);
        accepted
    }

    fn edges_from(&self, state: StateId) -> &[Edge] {
        self.outgoing.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// States reachable from `states` through epsilon edges alone.
    pub fn closure(&self, mut states: StateSet) -> StateSet {
        let mut stack: Vec<StateId> = states.iter().copied().collect();
        while let Some(q) = stack.pop() {
            for edge in self.edges_from(q) {
                if edge.is_epsilon() && states.insert(edge.to) {
                    stack.push(edge.to);
                }
            }
        }
        states
    }

    /// States one `ch`-edge away from `states`, without closure.
    pub fn step(&self, states: &StateSet, ch: char) -> StateSet {
        states
            .iter()
            .flat_map(|&q| self.edges_from(q))
            .filter(|edge| edge.label == Label::Char(ch))
            .map(|edge| edge.to)
            .collect()
    }
}

/// Whether `nfa` accepts `input`, with no length cap.
pub fn is_match(nfa: &Nfa, input: &str) -> bool {
    Matcher::new(nfa).simulate(input, &mut NoopTracer)
}
