use std::sync::PoisonError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed, missing or out-of-range payload field.
    #[error("{0}")]
    InvalidInput(String),
    /// Lifecycle rule violation (delivered order edited, non-pending delete).
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A poisoned lock means a writer panicked mid-mutation.
impl<G> From<PoisonError<G>> for DomainError {
    fn from(e: PoisonError<G>) -> Self {
        DomainError::Internal(e.to_string())
    }
}
