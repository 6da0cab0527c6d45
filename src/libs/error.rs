//! Store-level error taxonomy.
//!
//! Every persistence operation reports the specific failure kind instead of a
//! generic one: validation problems, missing referents, and attachment files
//! that disappeared from disk while their metadata row survived. Command
//! modules hold `anyhow::Result` and convert with `?`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Required input was empty or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced task does not exist. Also raised when a document is
    /// created under a nonexistent task.
    #[error("task with ID {0} not found")]
    TaskNotFound(i64),

    /// The referenced document metadata row does not exist.
    #[error("document with ID {0} not found")]
    DocumentNotFound(i64),

    /// Document metadata exists but the stored file is gone.
    #[error("attachment file '{0}' is missing on disk")]
    FileMissing(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }
}
