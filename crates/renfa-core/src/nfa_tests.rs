use std::collections::BTreeSet;

use super::{Edge, Label, Nfa};

fn chain() -> Nfa {
    // 7 -a-> 9 -b-> 3, plus an unreachable 5
    Nfa::from_parts(
        [5],
        vec![
            Edge::new(Label::Char('a'), 7, 9),
            Edge::new(Label::Char('b'), 9, 3),
        ],
        7,
        [3],
    )
}

#[test]
fn from_parts_registers_endpoints() {
    let nfa = chain();

    assert_eq!(nfa.states(), &BTreeSet::from([3, 5, 7, 9]));
    assert_eq!(nfa.initial(), 7);
    assert!(nfa.is_final(3));
    assert!(!nfa.is_compact());
}

#[test]
fn remove_state_drops_touching_edges() {
    let mut nfa = chain();
    nfa.remove_state(9);

    assert_eq!(nfa.edge_count(), 0);
    assert!(!nfa.states().contains(&9));
}

#[test]
fn compact_numbers_breadth_first_from_initial() {
    let mut nfa = chain();
    nfa.compact();

    assert!(nfa.is_compact());
    assert_eq!(nfa.initial(), 0);
    assert_eq!(
        nfa.edges(),
        &[
            Edge::new(Label::Char('a'), 0, 1),
            Edge::new(Label::Char('b'), 1, 2),
        ]
    );
    assert_eq!(nfa.finals(), &BTreeSet::from([2]));
    // unreachable state goes last
    assert_eq!(nfa.state_count(), 4);
}

#[test]
fn compact_is_stable_on_compact_input() {
    let mut nfa = chain();
    nfa.compact();
    let once = nfa.clone();
    nfa.compact();

    assert_eq!(nfa, once);
}

#[test]
fn epsilon_loop_detection() {
    assert!(Edge::epsilon(4, 4).is_epsilon_loop());
    assert!(!Edge::epsilon(4, 5).is_epsilon_loop());
    assert!(!Edge::new(Label::Char('a'), 4, 4).is_epsilon_loop());
}

#[test]
fn redirect_moves_both_endpoints() {
    let mut edge = Edge::epsilon(2, 2);
    edge.redirect(2, 0);

    assert_eq!(edge, Edge::epsilon(0, 0));
}

#[test]
fn alphabet_skips_epsilon() {
    let nfa = Nfa::from_parts(
        [],
        vec![
            Edge::new(Label::Char('b'), 0, 1),
            Edge::epsilon(1, 2),
            Edge::new(Label::Char('a'), 2, 0),
        ],
        0,
        [2],
    );

    assert_eq!(nfa.alphabet(), BTreeSet::from(['a', 'b']));
}

#[test]
fn serializes_labels_by_kind() {
    let nfa = Nfa::from_parts(
        [],
        vec![Edge::new(Label::Char('a'), 0, 1), Edge::epsilon(1, 2)],
        0,
        [2],
    );

    let json = serde_json::to_string(&nfa).unwrap();
    insta::assert_snapshot!(json, @r#"{"states":[0,1,2],"edges":[{"label":{"char":"a"},"from":0,"to":1},{"label":"epsilon","from":1,"to":2}],"initial":0,"finals":[2]}"#);
}
