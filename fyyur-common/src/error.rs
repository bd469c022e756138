//! Common error types for Fyyur

use thiserror::Error;

/// Common result type for Fyyur operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Fyyur crates
#[derive(Error, Debug)]
pub enum Error {
    /// Persistence failure: constraint violation, connection loss (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Submitted data failed validation
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl Error {
    /// True for errors caused by the submitted data rather than the server
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::Validation(_))
    }
}
