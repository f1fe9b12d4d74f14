use renfa_core::Colors;
use renfa_lib::Error;

use super::run_common::{compile_or_exit, limits, report_compile_error};

pub struct ExecArgs {
    pub pattern: String,
    pub candidates: Vec<String>,
    pub optimize: bool,
    pub max_len: Option<usize>,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let automaton =
        compile_or_exit(&args.pattern, args.optimize, args.color).with_limits(limits(args.max_len));
    let colors = Colors::new(args.color);
    let width = verdict_width(&args.candidates);

    for candidate in &args.candidates {
        match automaton.matches(candidate) {
            Ok(accepted) => println!("{}", verdict_line(candidate, accepted, width, colors)),
            Err(Error::Compile(err)) => report_compile_error(&err, candidate, args.color),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

/// Column width fitting every quoted candidate.
pub fn verdict_width(candidates: &[String]) -> usize {
    candidates
        .iter()
        .map(|s| s.chars().count() + 2)
        .max()
        .unwrap_or(2)
}

pub fn verdict_line(candidate: &str, accepted: bool, width: usize, c: Colors) -> String {
    let quoted = format!("{candidate:?}");
    if accepted {
        format!("{quoted:<width$}  {}accept{}", c.green, c.reset)
    } else {
        format!("{quoted:<width$}  {}reject{}", c.red, c.reset)
    }
}
