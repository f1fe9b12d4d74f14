//! Arena-style NFA: integer states, flat `(label, from, to)` edge list.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Opaque state identifier. States carry no payload.
pub type StateId = u32;

/// Symbol used when printing epsilon edges.
pub const EPSILON_SYMBOL: char = 'λ';

/// Edge label: a literal character or the empty-string transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Char(char),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }

    /// The character this label consumes, if any.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Label::Char(c) => Some(*c),
            Label::Epsilon => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Char(c) => write!(f, "{c}"),
            Label::Epsilon => write!(f, "{EPSILON_SYMBOL}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub label: Label,
    pub from: StateId,
    pub to: StateId,
}

impl Edge {
    pub fn new(label: Label, from: StateId, to: StateId) -> Self {
        Self { label, from, to }
    }

    pub fn epsilon(from: StateId, to: StateId) -> Self {
        Self::new(Label::Epsilon, from, to)
    }

    pub fn is_epsilon(&self) -> bool {
        self.label.is_epsilon()
    }

    /// `(q) --λ--> (q)`: contributes nothing to acceptance.
    pub fn is_epsilon_loop(&self) -> bool {
        self.is_epsilon() && self.from == self.to
    }

    /// Move whichever endpoints touch `old` onto `new`.
    pub fn redirect(&mut self, old: StateId, new: StateId) {
        if self.from == old {
            self.from = new;
        }
        if self.to == old {
            self.to = new;
        }
    }
}

/// A nondeterministic finite automaton.
///
/// Owns its state set, edge list, a single initial state and a set of
/// final states. Ids may be sparse while the automaton is being built or
/// simplified; [`compact`](Self::compact) renumbers them into `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nfa {
    states: BTreeSet<StateId>,
    edges: Vec<Edge>,
    initial: StateId,
    finals: BTreeSet<StateId>,
}

impl Nfa {
    /// Create an automaton with a single (initial, non-final) state.
    pub fn new(initial: StateId) -> Self {
        Self {
            states: BTreeSet::from([initial]),
            edges: Vec::new(),
            initial,
            finals: BTreeSet::new(),
        }
    }

    /// Assemble an automaton from raw parts.
    ///
    /// Edge endpoints, the initial state and the final states are added to
    /// the state set if they are missing from `states`.
    pub fn from_parts(
        states: impl IntoIterator<Item = StateId>,
        edges: Vec<Edge>,
        initial: StateId,
        finals: impl IntoIterator<Item = StateId>,
    ) -> Self {
        let mut nfa = Self::new(initial);
        nfa.states.extend(states);
        for edge in edges {
            nfa.add_edge(edge);
        }
        for q in finals {
            nfa.add_final(q);
        }
        nfa
    }

    pub fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn finals(&self) -> &BTreeSet<StateId> {
        &self.finals
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_state(&mut self, state: StateId) {
        self.states.insert(state);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.states.insert(edge.from);
        self.states.insert(edge.to);
        self.edges.push(edge);
    }

    pub fn add_final(&mut self, state: StateId) {
        self.states.insert(state);
        self.finals.insert(state);
    }

    pub fn set_finals(&mut self, finals: impl IntoIterator<Item = StateId>) {
        self.finals = finals.into_iter().collect();
    }

    /// Remove a state and every edge touching it.
    pub fn remove_state(&mut self, state: StateId) {
        self.states.remove(&state);
        self.finals.remove(&state);
        self.edges.retain(|e| e.from != state && e.to != state);
    }

    pub fn retain_edges(&mut self, f: impl FnMut(&Edge) -> bool) {
        self.edges.retain(f);
    }

    pub fn incoming(&self, state: StateId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.to == state)
    }

    pub fn outgoing(&self, state: StateId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.from == state)
    }

    /// Every character some edge consumes.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.edges.iter().filter_map(|e| e.label.as_char()).collect()
    }

    /// Whether ids already form the gap-free range `0..n`.
    pub fn is_compact(&self) -> bool {
        self.states
            .iter()
            .enumerate()
            .all(|(i, &q)| i as StateId == q)
    }

    /// Renumber states into `0..n`.
    ///
    /// Ids are assigned breadth-first from the initial state, following
    /// edges in list order; states unreachable from the initial state keep
    /// their relative order after all reachable ones. Edge order is
    /// preserved, so compacting a compact automaton is a no-op.
    pub fn compact(&mut self) {
        let mut order: IndexSet<StateId> = IndexSet::with_capacity(self.states.len());
        let mut queue = VecDeque::from([self.initial]);
        order.insert(self.initial);

        while let Some(q) = queue.pop_front() {
            for edge in self.edges.iter().filter(|e| e.from == q) {
                if order.insert(edge.to) {
                    queue.push_back(edge.to);
                }
            }
        }
        order.extend(self.states.iter().copied());

        let renumber = |q: StateId| -> StateId {
            order
                .get_index_of(&q)
                .map_or(q, |i| i as StateId)
        };

        for edge in &mut self.edges {
            edge.from = renumber(edge.from);
            edge.to = renumber(edge.to);
        }
        self.initial = renumber(self.initial);
        self.finals = self.finals.iter().map(|&q| renumber(q)).collect();
        self.states = (0..order.len() as StateId).collect();
    }
}
