use renfa_core::{Edge, Label};

use super::{Instruction, Operator, build};
use crate::CompileError;
use crate::test_utils::nfa;

#[test]
fn literal() {
    insta::assert_snapshot!(nfa("a", false), @r"
    initial q0
    final   q1

    q0 -a-> q1
    ");
}

#[test]
fn union_thompson() {
    insta::assert_snapshot!(nfa("a+b", false), @r"
    initial q0
    final   q5

    q0 -λ-> q1
    q0 -λ-> q2
    q3 -λ-> q5
    q4 -λ-> q5
    q1 -a-> q3
    q2 -b-> q4
    ");
}

#[test]
fn union_optimized_shares_boundaries() {
    insta::assert_snapshot!(nfa("a+b", true), @r"
    initial q0
    final   q1

    q0 -a-> q1
    q0 -b-> q1
    ");
}

#[test]
fn concat_splices_in_both_modes() {
    let expected = "initial q0\nfinal   q2\n\nq0 -a-> q1\nq1 -b-> q2\n";

    assert_eq!(nfa("ab", false), expected);
    assert_eq!(nfa("ab", true), expected);
}

#[test]
fn star_thompson() {
    insta::assert_snapshot!(nfa("a*", false), @r"
    initial q0
    final   q1

    q0 -λ-> q1
    q1 -λ-> q0
    q0 -a-> q1
    ");
}

#[test]
fn star_optimized_single_state() {
    insta::assert_snapshot!(nfa("a*", true), @r"
    initial q0
    final   q0

    q0 -a-> q0
    ");
}

#[test]
fn concat_after_star_keeps_boundary() {
    insta::assert_snapshot!(nfa("(a+b)*c", true), @r"
    initial q0
    final   q2

    q0 -λ-> q1
    q0 -a-> q0
    q0 -b-> q0
    q1 -c-> q2
    ");
}

#[test]
fn star_of_star_is_star() {
    assert_eq!(nfa("(a*)*", true), nfa("a*", true));
}

#[test]
fn union_with_lambda_collapses() {
    assert_eq!(nfa("a*+^", true), nfa("a*", true));
    assert_eq!(nfa("λ+a*", true), nfa("a*", true));
    assert_eq!(nfa("^+λ", true), nfa("^", true));
}

#[test]
fn concat_with_lambda_collapses() {
    assert_eq!(nfa("a^", true), nfa("a", true));
    assert_eq!(nfa("^a", true), nfa("a", true));
}

#[test]
fn star_over_star_headed_operand_gets_entry_state() {
    // Without the fresh entry state the loop state would also be the
    // `a*` loop, and "a" would be accepted.
    insta::assert_snapshot!(nfa("(a*b)*", true), @r"
    initial q0
    final   q0

    q0 -λ-> q1
    q1 -λ-> q2
    q1 -a-> q1
    q2 -b-> q0
    ");
}

#[test]
fn star_over_star_trailed_operand_loops_back() {
    insta::assert_snapshot!(nfa("(ba*)*", true), @r"
    initial q0
    final   q0

    q2 -λ-> q0
    q1 -λ-> q2
    q0 -b-> q1
    q2 -a-> q2
    ");
}

#[test]
fn unoptimized_has_single_final() {
    for pattern in ["a", "a+b", "(a+b)*c", "(a*b)*", "a^+λ*"] {
        let nfa = crate::compile(pattern, false).unwrap();
        assert_eq!(nfa.finals().len(), 1, "{pattern}");
    }
}

#[test]
fn underflow_is_reported() {
    assert_eq!(
        build(&[Instruction::Push('a'), Instruction::Union], false),
        Err(CompileError::StackUnderflow {
            operator: Operator::Union
        })
    );
    assert_eq!(
        build(&[Instruction::Kleene], true),
        Err(CompileError::StackUnderflow {
            operator: Operator::Kleene
        })
    );
    assert_eq!(
        build(&[], false),
        Err(CompileError::StackUnderflow {
            operator: Operator::Finish
        })
    );
}

#[test]
fn leftover_fragments_are_reported() {
    let code = [Instruction::Push('a'), Instruction::Push('b')];

    assert_eq!(
        build(&code, false),
        Err(CompileError::DanglingFragments { count: 2 })
    );
}

#[test]
fn ids_are_unique_before_compaction() {
    let code = [
        Instruction::Push('a'),
        Instruction::Push('b'),
        Instruction::Union,
        Instruction::Kleene,
    ];
    let nfa = build(&code, false).unwrap();

    assert_eq!(nfa.state_count(), 6);
    assert!(nfa.edges().contains(&Edge::new(Label::Char('a'), 0, 1)));
    assert_eq!(nfa.initial(), 4);
}
