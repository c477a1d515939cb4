//! # Record Store Errors

use thiserror::Error;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
///
/// Neither variant is recovered from. Handlers surface them as 500s.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Stored bytes are not a valid JSON array of students
    #[error("Malformed storage at {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// Read or write failed at the filesystem level
    #[error("I/O error: {0}")]
    Io(String),

    /// `init` found an existing data file and was not forced
    #[error("Data file already exists: {0}")]
    AlreadyExists(String),
}

impl StoreError {
    pub fn malformed(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
