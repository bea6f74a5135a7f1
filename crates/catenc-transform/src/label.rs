//! Label encoding: categories to integer codes.
//!
//! Fit replaces each requested column with an `Int64` column of codes in the
//! same position and records a [`LabelEncoderState`] per column. Apply reuses
//! those states on new data and never learns new categories.
//!
//! Both operations mutate the caller's frame, but only after every column
//! has been encoded on a working copy; a failure leaves the frame untouched.

use catenc_model::{
    CategoryValue, EncodeOptions, LabelEncoderState, LabelRegistry, UNSEEN_LABEL_CODE,
    UnseenCategoryPolicy,
};
use polars::prelude::{Column, DataFrame};
use tracing::{debug, info, warn};

use crate::data_utils::{column_values, requested_columns, unseen_category};
use crate::error::Result;

/// Fit a label encoder for each of `columns` and encode them in place.
///
/// Codes follow the canonical category order, so
/// `["red", "blue", "red", "green"]` becomes `[2, 0, 2, 1]`.
///
/// # Errors
///
/// - `ColumnNotFound` if a column is absent.
/// - `DuplicateColumn` if a column is listed twice.
/// - `UnsupportedDtype` for nested or binary columns.
///
/// # Examples
///
/// ```
/// use catenc_transform::fit_label_encode;
/// use polars::prelude::df;
///
/// let mut df = df! { "color" => &["red", "blue", "red", "green"] }.unwrap();
/// let registry = fit_label_encode(&["color"], &mut df).unwrap();
///
/// let codes: Vec<_> = df.column("color").unwrap().i64().unwrap().into_no_null_iter().collect();
/// assert_eq!(codes, vec![2, 0, 2, 1]);
/// assert_eq!(registry.get("color").unwrap().len(), 3);
/// ```
pub fn fit_label_encode<S: AsRef<str>>(columns: &[S], df: &mut DataFrame) -> Result<LabelRegistry> {
    let names = requested_columns(columns)?;
    let mut working = df.clone();
    let mut registry = LabelRegistry::new();

    for column in names {
        let values = column_values(&working, column)?;
        let state = LabelEncoderState::fit(values.iter().cloned());
        let (codes, _) = encode(column, &state, &values, UnseenCategoryPolicy::Strict)?;
        working.with_column(Column::new(column.into(), codes))?;

        debug!(column, categories = state.len(), "fitted label encoder");
        registry.insert(column, state)?;
    }

    *df = working;
    info!(columns = registry.len(), rows = df.height(), "label encoding fitted");
    Ok(registry)
}

/// Apply a fitted label registry to new data with strict unseen handling.
///
/// # Errors
///
/// See [`apply_label_encode_with_options`].
pub fn apply_label_encode(registry: &LabelRegistry, df: &mut DataFrame) -> Result<()> {
    apply_label_encode_with_options(registry, df, &EncodeOptions::default())
}

/// Apply a fitted label registry to new data.
///
/// Only registry columns are touched. Under the lenient policy an unseen
/// value is written as [`UNSEEN_LABEL_CODE`].
///
/// # Errors
///
/// - `ColumnNotFound` if a registered column is absent.
/// - `UnseenCategory` for a value not seen at fit, under the strict policy.
pub fn apply_label_encode_with_options(
    registry: &LabelRegistry,
    df: &mut DataFrame,
    options: &EncodeOptions,
) -> Result<()> {
    let mut working = df.clone();

    for (column, state) in registry.iter() {
        let values = column_values(&working, column)?;
        let (codes, unseen) = encode(column, state, &values, options.unseen)?;
        if unseen > 0 {
            warn!(
                column,
                unseen,
                code = UNSEEN_LABEL_CODE,
                "unseen categories replaced by sentinel code"
            );
        }
        working.with_column(Column::new(column.into(), codes))?;
        debug!(column, "applied label encoder");
    }

    *df = working;
    info!(columns = registry.len(), rows = df.height(), "label encoding applied");
    Ok(())
}

/// Map values to codes, returning the codes and the number of unseen values.
fn encode(
    column: &str,
    state: &LabelEncoderState,
    values: &[CategoryValue],
    policy: UnseenCategoryPolicy,
) -> Result<(Vec<i64>, usize)> {
    let mut codes = Vec::with_capacity(values.len());
    let mut unseen = 0;
    for (row, value) in values.iter().enumerate() {
        match (state.code_of(value), policy) {
            (Some(code), _) => codes.push(code as i64),
            (None, UnseenCategoryPolicy::Lenient) => {
                unseen += 1;
                codes.push(UNSEEN_LABEL_CODE);
            }
            (None, UnseenCategoryPolicy::Strict) => {
                return Err(unseen_category(column, row, value));
            }
        }
    }
    Ok((codes, unseen))
}
