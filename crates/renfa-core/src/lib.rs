#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for renfa automata.
//!
//! An [`Nfa`] is an arena of integer state ids with a flat edge list.
//! Edges reference states by id only, so fragments can be spliced,
//! merged and renumbered without any ownership bookkeeping.
//!
//! Besides the data model this crate hosts the two text exports that
//! every consumer shares: the human-readable [`dump`] and the [`dot`]
//! graph description handed to diagram renderers.

mod colors;
mod dump;
mod nfa;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod nfa_tests;

pub use colors::Colors;
pub use dump::{dot, dump};
pub use nfa::{EPSILON_SYMBOL, Edge, Label, Nfa, StateId};
