//! Shared logic for the commands.

use renfa_compiler::{CompileError, Compiler};
use renfa_lib::{Automaton, Error, MatchLimits};

/// Print a compile error against `source` and exit.
pub fn report_compile_error(err: &CompileError, source: &str, color: bool) -> ! {
    if err.is_internal() {
        log::error!("please report this: {err}");
    }
    eprintln!("{}", err.printer().source(source).colored(color).render());
    std::process::exit(1);
}

/// Compile `pattern`, or report the problem and exit.
pub fn compile_or_exit(pattern: &str, optimize: bool, color: bool) -> Automaton {
    match Automaton::with_compiler(pattern, Compiler::new().optimize(optimize)) {
        Ok(automaton) => automaton,
        Err(Error::Compile(err)) => report_compile_error(&err, pattern, color),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

pub fn limits(max_len: Option<usize>) -> MatchLimits {
    match max_len {
        Some(len) => MatchLimits::new().max_input_len(len),
        None => MatchLimits::new(),
    }
}
