//! Shared utilities for the categorical encoding crates.
//!
//! This crate bridges Polars columns and the DataFrame-free value types in
//! `catenc-model`.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{column_categories, is_encodable, widen_f32};
