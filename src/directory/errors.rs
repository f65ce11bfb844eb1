//! # Directory Errors
//!
//! Error types for the user directory module.

use thiserror::Error;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors produced by user validation and the record store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// A required field is absent or whitespace-only
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Email already registered
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// No record with the requested identifier
    #[error("User not found")]
    UserNotFound,

    /// Store lock was poisoned by a panicking writer
    #[error("Storage error: lock poisoned")]
    LockPoisoned,
}

impl DirectoryError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            DirectoryError::MissingField(_) => 400,
            DirectoryError::EmailAlreadyExists => 400,

            // 404 Not Found
            DirectoryError::UserNotFound => 404,

            // 500 Internal Server Error
            DirectoryError::LockPoisoned => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
