//! Matching engine.

mod error;
mod matcher;
mod trace;


pub use error::RuntimeError;
pub use matcher::{MatchLimits, Matcher, is_match};
pub use trace::{NoopTracer, PrintTracer, Tracer};
