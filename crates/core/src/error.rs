use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while parsing or validating core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid log type: {0}")]
    InvalidLogType(String),

    #[error("Invalid pattern type: {0}")]
    InvalidPatternType(String),

    #[error("Invalid drift severity: {0}")]
    InvalidDriftSeverity(String),

    #[error("Invalid chatter mode: {0}")]
    InvalidChatterMode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, CoreError>;
