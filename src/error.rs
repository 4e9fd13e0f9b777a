//! Error types for sqlmongo.

use thiserror::Error;

/// The main error type for translation.
///
/// Every error is terminal: no stage retries, recovers, or substitutes
/// defaults, and the façade passes the first error through unwrapped.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Leading keyword is not SELECT, INSERT, UPDATE, or DELETE.
    #[error("unknown command: '{0}'. Expected: SELECT, INSERT, UPDATE, or DELETE")]
    UnknownCommand(String),

    /// Input is structurally malformed for the requested operation.
    #[error("invalid input: '{0}'")]
    InvalidInput(String),

    /// A required marker keyword is absent from the input.
    #[error("keyword {keyword} not found in '{input}'")]
    NotFound {
        keyword: &'static str,
        input: String,
    },

    /// An INSERT column list disagrees with its value list.
    #[error("column/value mismatch: {columns} columns but {values} values")]
    ColumnValueMismatch { columns: usize, values: usize },

    /// A command handler was reached with the wrong statement.
    #[error("invalid command: '{0}'")]
    InvalidCommand(String),
}

impl TranslateError {
    /// Create an invalid-input error for the given fragment.
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidInput(input.into())
    }

    /// Create a missing-keyword error.
    pub fn not_found(keyword: &'static str, input: impl Into<String>) -> Self {
        Self::NotFound {
            keyword,
            input: input.into(),
        }
    }
}

/// Result type alias for translation.
pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslateError::not_found("FROM", "SELECT * users");
        assert_eq!(err.to_string(), "keyword FROM not found in 'SELECT * users'");

        let err = TranslateError::ColumnValueMismatch {
            columns: 2,
            values: 1,
        };
        assert_eq!(
            err.to_string(),
            "column/value mismatch: 2 columns but 1 values"
        );
    }
}
