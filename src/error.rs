//! Error handling module
//!
//! Application-level errors for the booking CLI.

use crate::domain::InvalidPurchase;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Purchase errors
    #[error(transparent)]
    Purchase(#[from] InvalidPurchase),

    // Environment errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Check if the user can recover by entering different details.
    /// Anything else ends the CLI session.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Purchase(_))
    }
}
