//! Table and column-selection errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while reading, selecting, or building table columns.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("invalid column: {name} is not present in the table")]
    InvalidColumn { name: String },

    #[error("invalid column: {name} is not numeric")]
    NonNumericColumn { name: String },

    #[error("column {name} has {actual} rows, table has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column: {name}")]
    DuplicateColumn { name: String },

    #[error("column selection matched no columns: {selector}")]
    EmptySelection { selector: String },

    #[error("missing value in column {name} at row {row}")]
    MissingValue { name: String, row: usize },

    #[error("row index {index} out of bounds for {n_rows} rows")]
    RowOutOfBounds { index: usize, n_rows: usize },
}

impl ErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidColumn { .. } | Self::NonNumericColumn { .. } => {
                error_code::INVALID_COLUMN
            }
            _ => error_code::TABLE_ERROR,
        }
    }
}
