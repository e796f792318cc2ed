// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the caller sent bad input (as opposed to a server fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Domain(_) | AppError::Serialization(_)
        )
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
