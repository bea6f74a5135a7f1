//! DataFrame helpers shared by the label and one-hot operations.

use std::collections::HashSet;

use catenc_common::{column_categories, is_encodable};
use catenc_model::CategoryValue;
use polars::prelude::DataFrame;

use crate::error::{EncodeError, Result};

/// Validate a fit call's column list and borrow it as `&str`s.
///
/// Only repeats are checked here; presence is checked per column against
/// the working frame, which changes as one-hot columns are replaced.
pub fn requested_columns<S: AsRef<str>>(columns: &[S]) -> Result<Vec<&str>> {
    let mut seen = HashSet::with_capacity(columns.len());
    let mut names = Vec::with_capacity(columns.len());
    for column in columns {
        let name = column.as_ref();
        if !seen.insert(name) {
            return Err(EncodeError::DuplicateColumn {
                column: name.to_string(),
            });
        }
        names.push(name);
    }
    Ok(names)
}

/// Read every row of `name` as a category, in row order.
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<CategoryValue>> {
    let column = df.column(name).map_err(|_| EncodeError::ColumnNotFound {
        column: name.to_string(),
    })?;
    if !is_encodable(column.dtype()) {
        return Err(EncodeError::UnsupportedDtype {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    Ok(column_categories(column)?)
}

/// Build the error for a value the fitted state does not know.
pub fn unseen_category(column: &str, row: usize, value: &CategoryValue) -> EncodeError {
    EncodeError::UnseenCategory {
        column: column.to_string(),
        value: value.to_string(),
        row,
    }
}
