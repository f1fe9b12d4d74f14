//! Automaton construction.
//!
//! The builder executes the parser's instruction stream on a stack of NFA
//! fragments (Thompson construction). In optimizing mode it also elides
//! states at fragment boundaries and the simplifier prunes what is left.

mod builder;
mod compiler;
mod fragment;
mod instruction;
mod simplify;

#[cfg(test)]
mod builder_tests;

pub use builder::build;
pub use compiler::{Compiler, DEFAULT_MAX_PATTERN_LEN, compile};
pub use fragment::{Fragment, Op};
pub use instruction::{Instruction, Operator};
pub use simplify::simplify;
