//! Test helpers shared by the snapshot tests.

use renfa_core::{Colors, dump};

/// Instruction stream of a valid pattern, one instruction per line.
pub fn code(pattern: &str) -> String {
    let code = crate::parser::parse(pattern).expect("pattern should parse");
    let lines: Vec<String> = code.iter().map(ToString::to_string).collect();
    lines.join("\n")
}

/// Uncolored dump of a valid pattern.
pub fn nfa(pattern: &str, optimize: bool) -> String {
    let nfa = crate::compile(pattern, optimize).expect("pattern should compile");
    dump(&nfa, Colors::OFF)
}

/// Rendered error of an invalid pattern.
pub fn error(pattern: &str) -> String {
    let err = crate::compile(pattern, false).expect_err("pattern should fail");
    crate::error_message(&err, pattern)
}
