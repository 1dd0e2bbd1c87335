//! Error types for classcal.

use thiserror::Error;

/// Errors that can occur in classcal operations.
#[derive(Error, Debug)]
pub enum CalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected {1}")]
    InvalidDate(String, &'static str),

    #[error("Invalid date range: {from} is after {to}")]
    InvalidRange {
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    },

    #[error("Unknown event category '{0}'. Expected one of: exam, assignment, holiday, meeting, event")]
    UnknownCategory(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Event store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for classcal operations.
pub type CalResult<T> = Result<T, CalError>;
