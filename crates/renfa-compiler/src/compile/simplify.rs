//! Post-construction cleanup for optimized automata.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexSet;
use renfa_core::{Nfa, StateId};

/// Remove epsilon self-loops, redundant final states and duplicate edges.
///
/// A second run on the output changes nothing.
pub fn simplify(nfa: &mut Nfa) {
    let before = (nfa.state_count(), nfa.edge_count());

    nfa.retain_edges(|edge| !edge.is_epsilon_loop());
    prune_finals(nfa);
    dedup_edges(nfa);

    log::debug!(
        "simplified {} states, {} edges -> {} states, {} edges",
        before.0,
        before.1,
        nfa.state_count(),
        nfa.edge_count()
    );
}

/// A final state is redundant when it has no way out and is only entered
/// through epsilon edges: its predecessors can accept in its place.
fn is_redundant(nfa: &Nfa, state: StateId) -> bool {
    if state == nfa.initial() || nfa.outgoing(state).next().is_some() {
        return false;
    }
    let mut incoming = nfa.incoming(state).peekable();
    incoming.peek().is_some() && incoming.all(|edge| edge.is_epsilon() && edge.from != edge.to)
}

fn prune_finals(nfa: &mut Nfa) {
    let mut worklist: IndexSet<StateId> = nfa.finals().iter().copied().collect();
    let mut essential: BTreeSet<StateId> = BTreeSet::new();

    while let Some(state) = worklist.pop() {
        if !is_redundant(nfa, state) {
            essential.insert(state);
            continue;
        }

        let predecessors: Vec<StateId> = nfa.incoming(state).map(|edge| edge.from).collect();
        log::trace!("drop final q{state}");
        nfa.remove_state(state);
        essential.remove(&state);
        worklist.extend(predecessors);
    }

    nfa.set_finals(essential);
}

fn dedup_edges(nfa: &mut Nfa) {
    let mut seen = HashSet::new();
    nfa.retain_edges(|&edge| seen.insert(edge));
}
