use thiserror::Error;

/// Errors raised when an encoder state or registry would break its invariants.
///
/// States built by the fit operations never produce these; they guard
/// registries assembled by hand or deserialized from a caller's storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("categories must be strictly increasing in canonical order (violated at index {index})")]
    UnsortedCategories { index: usize },
    #[error("{outputs} output columns for {categories} categories")]
    OutputCountMismatch { categories: usize, outputs: usize },
    #[error("output column '{name}' is generated more than once")]
    DuplicateOutputColumn { name: String },
    #[error("column '{column}' is already registered")]
    DuplicateColumn { column: String },
}

pub type Result<T> = std::result::Result<T, StateError>;
