//! Rendering compile errors for people.

mod printer;

#[cfg(test)]
mod printer_tests;

pub use printer::DiagnosticsPrinter;

use crate::CompileError;

/// Plain-text rendering of `error` against the pattern it came from.
pub fn error_message(error: &CompileError, source: &str) -> String {
    DiagnosticsPrinter::new(error).source(source).render()
}
