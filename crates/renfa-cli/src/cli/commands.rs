//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("renfa")
        .about("Compile restricted regular expressions to NFAs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(dot_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern")
        .after_help(
            r#"EXAMPLES:
  renfa check '(a+b)*c'          # silent on success
  renfa check 'a+'               # reports the parse error"#,
        )
        .arg(pattern_arg())
        .arg(color_arg())
}

/// Show the compiled automaton.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled automaton")
        .after_help(
            r#"EXAMPLES:
  renfa dump 'a*b'               # states and edges
  renfa dump -O 'a*b'            # optimized construction
  renfa dump --json 'a*b'        # machine-readable
  renfa dump --code 'a*b'        # parser output"#,
        )
        .arg(pattern_arg())
        .arg(optimize_arg())
        .arg(json_arg())
        .arg(code_arg())
        .arg(color_arg())
}

/// Print the graph description.
pub fn dot_command() -> Command {
    Command::new("dot")
        .about("Print the automaton as a Graphviz graph")
        .after_help(
            r#"EXAMPLES:
  renfa dot '(a+b)*c' | dot -Tpng > nfa.png"#,
        )
        .arg(pattern_arg())
        .arg(optimize_arg())
        .arg(color_arg().hide(true))
}

/// Test candidates against a pattern.
pub fn exec_command() -> Command {
    Command::new("exec")
        .about("Test strings against a pattern")
        .after_help(
            r#"EXAMPLES:
  renfa exec '(a+b)*c' c abc ab  # one verdict per candidate
  renfa exec 'a*' ''             # empty string"#,
        )
        .arg(pattern_arg())
        .arg(candidates_arg())
        .arg(optimize_arg())
        .arg(max_len_arg())
        .arg(color_arg())
}

/// Trace the simulation of one candidate.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace the state sets while matching a string")
        .after_help(
            r#"EXAMPLES:
  renfa trace '(a+b)*c' abc
  RUST_LOG=renfa_compiler=trace renfa trace 'a*' aa"#,
        )
        .arg(pattern_arg())
        .arg(candidate_arg())
        .arg(optimize_arg())
        .arg(max_len_arg())
        .arg(color_arg())
}
