//! Custom error types for contas
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum ContasError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Rejected input (unknown entry type, blank description, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A `valor` field that does not parse as a number
    #[error("Invalid amount '{value}' for bill '{descricao}'")]
    InvalidAmount { descricao: String, value: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// PDF report errors
    #[error("Report error: {0}")]
    Report(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ContasError {
    /// Create an invalid amount error for the given bill description
    pub fn invalid_amount(descricao: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            descricao: descricao.into(),
            value: value.into(),
        }
    }
}

impl From<std::io::Error> for ContasError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ContasError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type ContasResult<T> = Result<T, ContasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContasError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = ContasError::invalid_amount("Aluguel", "abc");
        assert_eq!(err.to_string(), "Invalid amount 'abc' for bill 'Aluguel'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ContasError = io_err.into();
        assert!(matches!(err, ContasError::Io(_)));
    }
}
