//! Error types for fit and apply operations.

use catenc_model::StateError;
use thiserror::Error;

/// Errors that can occur while fitting or applying an encoder.
///
/// Any error aborts the whole call; the caller's DataFrame is left as it was.
#[derive(Debug, Error)]
pub enum EncodeError {
    // === Column Errors ===
    /// Requested or registered column is absent from the DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// The same column was requested twice in one fit call.
    #[error("column '{column}' requested more than once")]
    DuplicateColumn { column: String },

    /// A generated one-hot column name is already taken.
    #[error("one-hot column '{generated}' for '{column}' already exists")]
    ColumnNameCollision { column: String, generated: String },

    /// Column dtype has no category form (list, array, struct, binary).
    #[error("column '{column}' has unsupported dtype {dtype}")]
    UnsupportedDtype { column: String, dtype: String },

    // === Category Errors ===
    /// Apply found a value that the fit never observed.
    #[error("unseen category '{value}' in column '{column}' at row {row}")]
    UnseenCategory {
        column: String,
        value: String,
        row: usize,
    },

    // === Internal Errors ===
    /// Fitted state or registry violated an invariant.
    #[error(transparent)]
    State(#[from] StateError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for EncodeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
