//! Error types for showbill.

use thiserror::Error;

/// Errors that can occur in showbill operations.
#[derive(Error, Debug)]
pub enum ShowbillError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for showbill operations.
pub type ShowbillResult<T> = Result<T, ShowbillError>;
