use std::collections::BTreeSet;

use super::{Symbol, parse};
use crate::test_utils::code;
use crate::{CompileError, Instruction};

#[test]
fn single_literal() {
    assert_eq!(parse("a"), Ok(vec![Instruction::Push('a')]));
}

#[test]
fn precedence_star_concat_union() {
    insta::assert_snapshot!(code("ab+c*"), @r"
    push a
    push b
    concat
    push c
    kleene
    union
    ");
}

#[test]
fn left_associative_operators() {
    insta::assert_snapshot!(code("a+b+cde"), @r"
    push a
    push b
    union
    push c
    push d
    concat
    push e
    concat
    union
    ");
}

#[test]
fn groups() {
    insta::assert_snapshot!(code("(a+b)*c"), @r"
    push a
    push b
    union
    kleene
    push c
    concat
    ");
}

#[test]
fn empty_literals() {
    insta::assert_snapshot!(code("a^+λ"), @r"
    push a
    push ^
    concat
    push λ
    union
    ");
}

#[test]
fn nested_groups() {
    insta::assert_snapshot!(code("((a))*"), @r"
    push a
    kleene
    ");
}

#[test]
fn dangling_union() {
    assert_eq!(
        parse("a+"),
        Err(CompileError::ParseError {
            position: 2,
            expected: BTreeSet::from([
                Symbol::Lit,
                Symbol::ParenOpen,
                Symbol::Cc,
                Symbol::Pf,
                Symbol::Pr,
            ]),
            got: Symbol::End,
        })
    );
}

#[test]
fn empty_pattern() {
    let Err(CompileError::ParseError {
        position, got, expected,
    }) = parse("")
    else {
        panic!("empty pattern should not parse");
    };

    assert_eq!(position, 0);
    assert_eq!(got, Symbol::End);
    assert!(expected.contains(&Symbol::Lit));
    assert!(expected.contains(&Symbol::Or));
}

#[test]
fn unclosed_group() {
    assert_eq!(
        parse("(a"),
        Err(CompileError::ParseError {
            position: 2,
            expected: BTreeSet::from([Symbol::Plus, Symbol::ParenClose]),
            got: Symbol::End,
        })
    );
}

#[test]
fn unopened_group() {
    assert_eq!(
        parse("a)"),
        Err(CompileError::ParseError {
            position: 1,
            expected: BTreeSet::from([Symbol::Plus, Symbol::End]),
            got: Symbol::ParenClose,
        })
    );
}

#[test]
fn double_star() {
    let err = parse("a**").unwrap_err();

    assert_eq!(err.position(), Some(2));
    assert!(matches!(
        err,
        CompileError::ParseError {
            got: Symbol::Star,
            ..
        }
    ));
}

#[test]
fn typed_dollar_does_not_accept() {
    assert_eq!(
        parse("a$b"),
        Err(CompileError::ParseError {
            position: 1,
            expected: BTreeSet::from([Symbol::Plus]),
            got: Symbol::End,
        })
    );
    assert_eq!(
        parse("a$"),
        Err(CompileError::ParseError {
            position: 1,
            expected: BTreeSet::from([Symbol::Plus]),
            got: Symbol::End,
        })
    );
}

#[test]
fn unknown_token_wins_over_parse_error() {
    assert_eq!(parse("a#b"), Err(CompileError::UnknownToken { position: 1 }));
    assert_eq!(parse("+ "), Err(CompileError::ParseError {
        position: 0,
        expected: BTreeSet::from([
            Symbol::Lit,
            Symbol::ParenOpen,
            Symbol::Or,
            Symbol::Cc,
            Symbol::Pf,
            Symbol::Pr,
        ]),
        got: Symbol::Plus,
    }));
}
