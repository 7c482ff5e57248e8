//! Error types for the tiempo crate

use thiserror::Error;

/// Result type alias for tiempo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the data source, persistence and quiz sessions
#[derive(Debug, Error)]
pub enum Error {
    /// SQLite read or write failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested verb is not in the dataset
    #[error("Verb not found: {0}")]
    VerbNotFound(String),

    /// Quiz session was driven through an invalid transition
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Misuse of a [`crate::models::QuizSession`]. These indicate a bug in the
/// caller, not a user mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("quiz is already completed")]
    Completed,

    #[error("question {index} was already answered")]
    AlreadyAnswered { index: usize },

    #[error("cannot advance past the last question")]
    AdvancePastEnd,

    #[error("quiz can only be reset once it is completed")]
    ResetWhileInProgress,
}
