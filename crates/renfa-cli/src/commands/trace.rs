use renfa_core::Colors;
use renfa_lib::Error;
use renfa_vm::PrintTracer;

use super::run_common::{compile_or_exit, limits, report_compile_error};

pub struct TraceArgs {
    pub pattern: String,
    pub candidate: String,
    pub optimize: bool,
    pub max_len: Option<usize>,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let automaton =
        compile_or_exit(&args.pattern, args.optimize, args.color).with_limits(limits(args.max_len));
    let colors = Colors::new(args.color);

    print!("{}", automaton.dump(colors));
    println!();

    let mut tracer = PrintTracer::new(automaton.nfa().finals(), colors);
    match automaton.trace(&args.candidate, &mut tracer) {
        Ok(_) => tracer.print(),
        Err(Error::Compile(err)) => report_compile_error(&err, &args.candidate, args.color),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
