//! One-hot encoding: categories to `Float64` indicator columns.
//!
//! Each encoded source column is dropped and replaced by one indicator
//! column per fitted category, appended after all other columns in category
//! order. Untouched columns keep their relative order.
//!
//! Indicators are built positionally from the source column's rows and
//! attached to the same frame, so row `i` of every indicator describes row
//! `i` of the input. Polars frames carry no row labels, which means a frame
//! sliced or filtered upstream lines up without any reindexing step.

use catenc_model::{
    CategoryValue, EncodeOptions, OneHotEncoderState, OneHotRegistry, UnseenCategoryPolicy,
};
use polars::prelude::{Column, DataFrame};
use tracing::{debug, info, warn};

use crate::data_utils::{column_values, requested_columns, unseen_category};
use crate::error::{EncodeError, Result};

/// Fit a one-hot encoder for each of `columns` with default options.
///
/// # Errors
///
/// See [`fit_onehot_encode_with_options`].
///
/// # Examples
///
/// ```
/// use catenc_transform::fit_onehot_encode;
/// use polars::prelude::df;
///
/// let mut df = df! { "color" => &["red", "blue", "red", "green"] }.unwrap();
/// let registry = fit_onehot_encode(&["color"], &mut df).unwrap();
///
/// let names: Vec<_> = df.get_column_names().into_iter().map(|n| n.to_string()).collect();
/// assert_eq!(names, ["color_blue", "color_green", "color_red"]);
/// assert_eq!(registry.len(), 1);
/// ```
pub fn fit_onehot_encode<S: AsRef<str>>(columns: &[S], df: &mut DataFrame) -> Result<OneHotRegistry> {
    fit_onehot_encode_with_options(columns, df, &EncodeOptions::default())
}

/// Fit a one-hot encoder for each of `columns` and encode them in place.
///
/// Output columns are named `{column}{separator}{category}`. Width grows
/// from `W` to `W - 1 + k` for each column with `k` categories.
///
/// # Errors
///
/// - `ColumnNotFound` if a column is absent.
/// - `DuplicateColumn` if a column is listed twice.
/// - `ColumnNameCollision` if a generated name already exists, including
///   names generated earlier in the same call.
/// - `UnsupportedDtype` for nested or binary columns.
pub fn fit_onehot_encode_with_options<S: AsRef<str>>(
    columns: &[S],
    df: &mut DataFrame,
    options: &EncodeOptions,
) -> Result<OneHotRegistry> {
    let names = requested_columns(columns)?;
    let mut working = df.clone();
    let mut registry = OneHotRegistry::new();

    for column in names {
        let values = column_values(&working, column)?;
        let state = OneHotEncoderState::fit(column, values.iter().cloned(), &options.separator)?;
        attach_indicators(&mut working, column, &state, &values, UnseenCategoryPolicy::Strict)?;

        debug!(column, categories = state.len(), "fitted one-hot encoder");
        registry.insert(column, state)?;
    }

    *df = working;
    info!(
        columns = registry.len(),
        width = df.width(),
        rows = df.height(),
        "one-hot encoding fitted"
    );
    Ok(registry)
}

/// Apply a fitted one-hot registry to new data with strict unseen handling.
///
/// # Errors
///
/// See [`apply_onehot_encode_with_options`].
pub fn apply_onehot_encode(registry: &OneHotRegistry, df: &mut DataFrame) -> Result<()> {
    apply_onehot_encode_with_options(registry, df, &EncodeOptions::default())
}

/// Apply a fitted one-hot registry to new data.
///
/// Produces exactly the fit-time indicator columns, in fit order, whatever
/// categories the new data contains. Under the lenient policy an unseen value
/// yields an all-zero indicator row.
///
/// # Errors
///
/// - `ColumnNotFound` if a registered column is absent.
/// - `ColumnNameCollision` if the frame already has a generated name.
/// - `UnseenCategory` for a value not seen at fit, under the strict policy.
pub fn apply_onehot_encode_with_options(
    registry: &OneHotRegistry,
    df: &mut DataFrame,
    options: &EncodeOptions,
) -> Result<()> {
    let mut working = df.clone();

    for (column, state) in registry.iter() {
        let values = column_values(&working, column)?;
        let unseen = attach_indicators(&mut working, column, state, &values, options.unseen)?;
        if unseen > 0 {
            warn!(column, unseen, "unseen categories encoded as all-zero rows");
        }
        debug!(column, "applied one-hot encoder");
    }

    *df = working;
    info!(
        columns = registry.len(),
        width = df.width(),
        rows = df.height(),
        "one-hot encoding applied"
    );
    Ok(())
}

/// Drop `column` and append the indicator columns of `state`.
///
/// A generated name equal to `column` itself is not a collision: the
/// source is gone by the time its indicators are attached.
///
/// Returns the number of rows whose value was not among the categories.
fn attach_indicators(
    df: &mut DataFrame,
    column: &str,
    state: &OneHotEncoderState,
    values: &[CategoryValue],
    policy: UnseenCategoryPolicy,
) -> Result<usize> {
    if let Some(generated) = state
        .output_columns()
        .iter()
        .find(|name| name.as_str() != column && df.get_column_index(name).is_some())
    {
        return Err(EncodeError::ColumnNameCollision {
            column: column.to_string(),
            generated: generated.clone(),
        });
    }

    let mut indicators = vec![vec![0.0_f64; values.len()]; state.len()];
    let mut unseen = 0;
    for (row, value) in values.iter().enumerate() {
        match (state.position_of(value), policy) {
            (Some(position), _) => indicators[position][row] = 1.0,
            (None, UnseenCategoryPolicy::Lenient) => unseen += 1,
            (None, UnseenCategoryPolicy::Strict) => {
                return Err(unseen_category(column, row, value));
            }
        }
    }

    // The source is left out before the indicators go in, so an indicator
    // may take over the source's own name.
    let mut columns: Vec<Column> = df
        .get_columns()
        .iter()
        .filter(|existing| existing.name().as_str() != column)
        .cloned()
        .collect();
    columns.extend(
        state
            .output_columns()
            .iter()
            .zip(indicators)
            .map(|(name, data)| Column::new(name.as_str().into(), data)),
    );
    *df = DataFrame::new(columns)?;
    Ok(unseen)
}
