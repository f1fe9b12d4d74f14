//! Runtime for matching strings against compiled renfa automata.
//!
//! The matcher simulates the NFA directly: it tracks the set of states the
//! automaton could be in and advances it one input character at a time.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{MatchLimits, Matcher, NoopTracer, PrintTracer, RuntimeError, Tracer, is_match};
