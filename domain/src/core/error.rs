//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All of these are validation failures: non-fatal and caller-recoverable.
/// The interaction layer is expected to re-prompt or abort the current
/// operation, never to terminate the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("question already exists in the system: {0}")]
    DuplicateQuestion(String),

    #[error("attraction already exists in the system: {0}")]
    DuplicateAttraction(String),

    #[error("activity type already exists in the system: {0}")]
    DuplicateActivityType(String),

    #[error("location already exists in the system: {0}")]
    DuplicateLocation(String),

    #[error("unknown activity type: {0}")]
    UnknownActivityType(String),

    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("location {location} is still used by: {}", .attractions.join(", "))]
    LocationInUse {
        location: String,
        attractions: Vec<String>,
    },

    #[error("no answer supplied for {0}")]
    MissingAnswer(String),

    #[error("answer code is {actual} bits wide but {expected} questions are registered")]
    CodeWidthMismatch { expected: usize, actual: usize },

    #[error("invalid answer bit {0:?} (expected \"0\" or \"1\")")]
    InvalidAnswerBit(String),
}

impl CatalogError {
    /// Check if this error is a duplicate-entry rejection
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateQuestion(_)
                | CatalogError::DuplicateAttraction(_)
                | CatalogError::DuplicateActivityType(_)
                | CatalogError::DuplicateLocation(_)
        )
    }
}
