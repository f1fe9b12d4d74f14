//! Pattern parser: tokenizer plus an SLR(1) shift-reduce driver.
//!
//! The parser never builds a tree. Each grammar reduction emits at most one
//! [`Instruction`](crate::Instruction), so the output is the pattern in
//! postfix order, ready for the automaton builder.

mod driver;
mod grammar;
mod lexer;

#[cfg(test)]
mod driver_tests;

pub use driver::parse;
pub use grammar::{Rule, State, Symbol};
pub use lexer::{Lexer, Token, check_literals, lex};
