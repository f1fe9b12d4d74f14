use indoc::indoc;

use super::{Colors, Edge, Label, Nfa, dot, dump};

fn sample() -> Nfa {
    Nfa::from_parts(
        [],
        vec![Edge::new(Label::Char('a'), 0, 1), Edge::epsilon(1, 2)],
        0,
        [2],
    )
}

#[test]
fn dump_plain() {
    insta::assert_snapshot!(dump(&sample(), Colors::OFF), @r"
    initial q0
    final   q2

    q0 -a-> q1
    q1 -λ-> q2
    ");
}

#[test]
fn dump_pads_state_column() {
    let nfa = Nfa::from_parts([], vec![Edge::new(Label::Char('x'), 10, 2)], 10, [2]);

    insta::assert_snapshot!(dump(&nfa, Colors::OFF), @r"
    initial q10
    final   q2

    q10 -x-> q2
    ");
}

#[test]
fn dump_without_edges() {
    let mut nfa = Nfa::new(0);
    nfa.add_final(0);

    insta::assert_snapshot!(dump(&nfa, Colors::OFF), @r"
    initial q0
    final   q0
    ");
}

#[test]
fn dump_lists_all_finals() {
    let nfa = Nfa::from_parts(
        [],
        vec![Edge::new(Label::Char('a'), 0, 1), Edge::new(Label::Char('b'), 0, 2)],
        0,
        [2, 1],
    );

    assert_eq!(
        dump(&nfa, Colors::OFF),
        indoc! {"
            initial q0
            final   q1 q2

            q0 -a-> q1
            q0 -b-> q2
        "}
    );
}

#[test]
fn dump_colored_wraps_ids() {
    let out = dump(&sample(), Colors::ON);

    assert!(out.contains("\x1b[34mq0\x1b[0m"));
    assert!(out.contains("\x1b[32ma\x1b[0m"));
}

#[test]
fn dot_lists_every_state_and_edge_once() {
    insta::assert_snapshot!(dot(&sample()), @r#"
    digraph nfa {
      rankdir = LR;
      node [shape = doublecircle]; q2;
      node [shape = circle]; q0; q1;
      "" [shape = none, width = 0.0];
      "" -> q0;
      q0 -> q1 [label = "a"];
      q1 -> q2 [label = "λ"];
    }
    "#);
}

#[test]
fn dot_escapes_quotes() {
    let nfa = Nfa::from_parts([], vec![Edge::new(Label::Char('"'), 0, 1)], 0, [1]);

    assert!(dot(&nfa).contains(r#"q0 -> q1 [label = "\""];"#));
}
