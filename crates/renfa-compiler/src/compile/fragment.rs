//! Partial automata on the builder stack.

use renfa_core::{Edge, Label, Nfa, StateId};

/// Operator that produced a fragment boundary.
///
/// Only `Kleene` boundaries matter for correctness: a star's entry state has
/// incoming back-edges and its exit state has outgoing ones, so neither can
/// be merged with a neighbouring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Primitive,
    Lambda,
    Union,
    Concat,
    Kleene,
}

/// An NFA under construction with a single entry and a single exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub init: StateId,
    pub fin: StateId,
    pub states: Vec<StateId>,
    pub edges: Vec<Edge>,
    /// Operator at the entry boundary.
    pub heading: Op,
    /// Operator at the exit boundary.
    pub trailing: Op,
    /// Operator applied last.
    pub last: Op,
}

impl Fragment {
    /// Two states joined by one edge.
    pub fn primitive(init: StateId, fin: StateId, label: Label) -> Self {
        let op = if label.is_epsilon() {
            Op::Lambda
        } else {
            Op::Primitive
        };
        Self {
            init,
            fin,
            states: vec![init, fin],
            edges: vec![Edge::new(label, init, fin)],
            heading: op,
            trailing: op,
            last: op,
        }
    }

    /// Fresh entry and exit states with no edges yet.
    pub fn shell(init: StateId, fin: StateId, op: Op) -> Self {
        Self {
            init,
            fin,
            states: vec![init, fin],
            edges: Vec::new(),
            heading: op,
            trailing: op,
            last: op,
        }
    }

    /// Fold `old` into `new`: every edge touching `old` now touches `new`.
    ///
    /// `new` is not added to the state list; it must already belong to
    /// whichever fragment ends up owning these edges.
    pub fn merge(&mut self, old: StateId, new: StateId) {
        for edge in &mut self.edges {
            edge.redirect(old, new);
        }
        self.states.retain(|&q| q != old);
        if self.init == old {
            self.init = new;
        }
        if self.fin == old {
            self.fin = new;
        }
    }

    /// Take over the states and edges of `other`.
    pub fn absorb(&mut self, other: Fragment) {
        self.states.extend(other.states);
        self.edges.extend(other.edges);
    }

    pub fn into_nfa(self) -> Nfa {
        Nfa::from_parts(self.states, self.edges, self.init, [self.fin])
    }
}
