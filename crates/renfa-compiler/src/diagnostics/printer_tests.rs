use indoc::indoc;

use super::{DiagnosticsPrinter, error_message};
use crate::test_utils::error;
use crate::{CompileError, Operator};

#[test]
fn unknown_token_points_at_character() {
    let out = error("a#b");

    assert!(out.contains("unknown token '#'"), "{out}");
    assert!(out.contains("a#b"), "{out}");
    assert!(out.contains("^ not a pattern symbol"), "{out}");
}

#[test]
fn parse_error_lists_expected_symbols() {
    let out = error("a+");

    assert!(out.contains("unexpected '$'"), "{out}");
    assert!(
        out.contains("expected [a-zA-Z0-9λ^], '(', ConcatExpr, PostfixExpr, PrimExpr; got '$'"),
        "{out}"
    );
}

#[test]
fn parse_error_quotes_found_literal() {
    let out = error("a**b");

    assert!(out.contains("unexpected '*'"), "{out}");

    let out = error("(a)(b");
    assert!(out.contains("expected '+', ')'; got '$'"), "{out}");
}

#[test]
fn typed_dollar_is_not_listed_as_expected() {
    let out = error("a$");

    assert!(out.contains("unexpected '$'"), "{out}");
    assert!(
        out.contains("expected '+'; got '$' (the end of the pattern is implicit)"),
        "{out}"
    );
}

#[test]
fn multibyte_source_renders() {
    let out = error("λ+→");

    assert!(out.contains("unknown token '→'"), "{out}");
}

#[test]
fn path_is_shown() {
    let err = CompileError::UnknownToken { position: 0 };
    let out = DiagnosticsPrinter::new(&err).source("#").path("pattern").render();

    assert!(out.contains("pattern"), "{out}");
}

#[test]
fn without_source_falls_back_to_display() {
    let err = CompileError::UnknownToken { position: 1 };

    insta::assert_snapshot!(err.printer().render(), @"error: unknown token at position 1");
}

#[test]
fn internal_errors_are_marked() {
    let err = CompileError::StackUnderflow {
        operator: Operator::Union,
    };

    assert_eq!(
        error_message(&err, "a+b"),
        indoc! {"
            internal compiler error: automaton stack underflow in union"}
    );
}

#[test]
fn colored_output_has_escapes() {
    let err = CompileError::UnknownToken { position: 1 };
    let out = err.printer().source("a#").colored(true).render();

    assert!(out.contains('\x1b'));
}
