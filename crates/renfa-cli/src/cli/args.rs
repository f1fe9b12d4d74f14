//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so the same flag reads the same everywhere.

use clap::{Arg, ArgAction, value_parser};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Pattern, e.g. '(a+b)*c'")
}

/// Strings to test (positional, one or more).
pub fn candidates_arg() -> Arg {
    Arg::new("candidates")
        .value_name("CANDIDATE")
        .num_args(1..)
        .required(true)
        .help("Strings to test against the pattern")
}

/// Single string to test (positional).
pub fn candidate_arg() -> Arg {
    Arg::new("candidate")
        .value_name("CANDIDATE")
        .required(true)
        .help("String to test against the pattern")
}

/// Optimizing construction (-O/--optimize).
pub fn optimize_arg() -> Arg {
    Arg::new("optimize")
        .short('O')
        .long("optimize")
        .action(ArgAction::SetTrue)
        .help("Elide redundant states and simplify the automaton")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Candidate length cap (--max-len).
pub fn max_len_arg() -> Arg {
    Arg::new("max_len")
        .long("max-len")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Reject candidates longer than N characters (default: 4096)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the automaton as JSON")
}

/// Instruction stream output (--code).
pub fn code_arg() -> Arg {
    Arg::new("code")
        .long("code")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("Print the parser's instruction stream instead of the automaton")
}
