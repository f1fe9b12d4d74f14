use super::run_common::compile_or_exit;

pub struct CheckArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    compile_or_exit(&args.pattern, false, args.color);
    // Silent on success (like cargo check)
}
