use renfa_compiler::Instruction;
use renfa_compiler::parser::parse;
use renfa_core::Colors;

use super::run_common::{compile_or_exit, report_compile_error};

pub struct DumpArgs {
    pub pattern: String,
    pub optimize: bool,
    pub json: bool,
    pub code: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    if args.code {
        let code = parse(&args.pattern)
            .unwrap_or_else(|err| report_compile_error(&err, &args.pattern, args.color));
        print!("{}", render_code(&code));
        return;
    }

    let automaton = compile_or_exit(&args.pattern, args.optimize, args.color);

    if args.json {
        match serde_json::to_string_pretty(automaton.nfa()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", automaton.dump(Colors::new(args.color)));
}

/// One instruction per line, in execution order.
pub fn render_code(code: &[Instruction]) -> String {
    code.iter().map(|instruction| format!("{instruction}\n")).collect()
}
