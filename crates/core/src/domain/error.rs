// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Duplicate quote id: {0}")]
    DuplicateId(u32),

    #[error("Quote {0} has empty text")]
    EmptyText(u32),

    #[error("Quote store must contain at least one record")]
    EmptyStore,

    #[error("Unknown {field}: {value}")]
    UnknownValue { field: &'static str, value: String },

    #[error("Invalid clock time '{0}' (expected HH:MM, 00:00-23:59)")]
    InvalidClockTime(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
