//! Errors that can occur while matching.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Candidate longer than the configured cap.
    #[error("input is {len} characters long, limit is {limit}")]
    InputTooLong { len: usize, limit: usize },
}
