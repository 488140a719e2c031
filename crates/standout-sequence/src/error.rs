//! Error types for the sequence crate.

use thiserror::Error;

/// Errors that can occur when querying a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// No element satisfied the search, or the sequence was empty.
    #[error("no element satisfies the condition")]
    NotFound,
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
