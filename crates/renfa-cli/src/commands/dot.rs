use super::run_common::compile_or_exit;

pub struct DotArgs {
    pub pattern: String,
    pub optimize: bool,
}

pub fn run(args: DotArgs) {
    let automaton = compile_or_exit(&args.pattern, args.optimize, false);
    print!("{}", automaton.dot());
}
