use renfa_compiler::parser::parse;

use super::dump::render_code;

#[test]
fn code_listing() {
    let code = parse("(a+b)*c").unwrap();

    insta::assert_snapshot!(render_code(&code), @r"
    push a
    push b
    union
    kleene
    push c
    concat
    ");
}

#[test]
fn lambda_literals_are_pushed() {
    let code = parse("a^").unwrap();

    insta::assert_snapshot!(render_code(&code), @r"
    push a
    push ^
    concat
    ");
}
