//! Text exports: human-readable listing and Graphviz graph description.

use std::fmt::Write as _;

use crate::colors::Colors;
use crate::nfa::{Label, Nfa, StateId};

fn state_name(q: StateId) -> String {
    format!("q{q}")
}

/// Generate a human-readable listing of the automaton.
///
/// ```text
/// initial q0
/// final   q1
///
/// q0 -a-> q1
/// ```
pub fn dump(nfa: &Nfa, colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();

    let width = nfa
        .states()
        .iter()
        .map(|&q| state_name(q).len())
        .max()
        .unwrap_or(2);

    let finals: Vec<String> = nfa
        .finals()
        .iter()
        .map(|&q| format!("{}{}{}", c.blue, state_name(q), c.reset))
        .collect();

    writeln!(
        out,
        "{}initial{} {}{}{}",
        c.dim,
        c.reset,
        c.blue,
        state_name(nfa.initial()),
        c.reset
    )
    .expect("String write never fails");
    writeln!(out, "{}final{}   {}", c.dim, c.reset, finals.join(" "))
        .expect("String write never fails");

    if nfa.edges().is_empty() {
        return out;
    }

    out.push('\n');
    for edge in nfa.edges() {
        let (blue, green, dim, reset) = (c.blue, c.green, c.dim, c.reset);
        let from = state_name(edge.from);
        let to = state_name(edge.to);
        let label = edge.label;
        writeln!(
            out,
            "{blue}{from:<width$}{reset} {dim}-{reset}{green}{label}{reset}{dim}->{reset} {blue}{to}{reset}"
        )
        .expect("String write never fails");
    }

    out
}

fn dot_label(label: Label) -> String {
    match label {
        Label::Char(ch @ ('"' | '\\')) => format!("\\{ch}"),
        other => other.to_string(),
    }
}

/// Generate the directed-graph description consumed by diagram renderers.
///
/// Final states are double-bordered, the initial state is marked by a
/// dangling edge from an invisible node, and every edge is listed once
/// with its label.
pub fn dot(nfa: &Nfa) -> String {
    let mut out = String::new();

    let finals: String = nfa
        .finals()
        .iter()
        .map(|&q| format!(" {};", state_name(q)))
        .collect();
    let others: String = nfa
        .states()
        .iter()
        .filter(|&&q| !nfa.is_final(q))
        .map(|&q| format!(" {};", state_name(q)))
        .collect();

    out.push_str("digraph nfa {\n");
    out.push_str("  rankdir = LR;\n");
    if !finals.is_empty() {
        writeln!(out, "  node [shape = doublecircle];{finals}").expect("String write never fails");
    }
    writeln!(out, "  node [shape = circle];{others}").expect("String write never fails");
    out.push_str("  \"\" [shape = none, width = 0.0];\n");
    writeln!(out, "  \"\" -> {};", state_name(nfa.initial())).expect("String write never fails");
    for edge in nfa.edges() {
        writeln!(
            out,
            "  {} -> {} [label = \"{}\"];",
            state_name(edge.from),
            state_name(edge.to),
            dot_label(edge.label)
        )
        .expect("String write never fails");
    }
    out.push_str("}\n");

    out
}
