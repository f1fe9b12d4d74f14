pub mod check;
pub mod dot;
pub mod dump;
pub mod exec;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod dump_tests;
