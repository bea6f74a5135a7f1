//! Polars column utility functions.
//!
//! This module reads a Polars column as a sequence of [`CategoryValue`]s,
//! one per row, in row order.

use catenc_model::CategoryValue;
use polars::prelude::{Column, DataType, PolarsResult};

/// Returns true if columns of `dtype` can be read as categories.
///
/// Nested and binary columns have no canonical category form.
pub fn is_encodable(dtype: &DataType) -> bool {
    !(dtype.is_nested() || matches!(dtype, DataType::Binary))
}

/// Reads every row of `column` as a [`CategoryValue`].
///
/// - Booleans map to `Bool`, all integer widths to `Int`, both float widths
///   to `Float`, strings to `Text`. `Float32` values keep their `f32`
///   decimal form (see [`widen_f32`]).
/// - Any other flat dtype (categorical, enum, temporal, decimal) is cast to
///   string and read as `Text`.
/// - Nulls map to `Null`.
///
/// Callers should check [`is_encodable`] first; unsupported dtypes surface
/// as the Polars cast error.
///
/// # Errors
///
/// Fails when an unsigned value does not fit in `i64` or the string cast is
/// not supported for the dtype.
///
/// # Examples
///
/// ```
/// use catenc_common::column_categories;
/// use catenc_model::CategoryValue;
/// use polars::prelude::{Column, NamedFrom};
///
/// let column = Column::new("size".into(), [Some(2_i32), None]);
/// assert_eq!(
///     column_categories(&column).unwrap(),
///     vec![CategoryValue::Int(2), CategoryValue::Null]
/// );
/// ```
pub fn column_categories(column: &Column) -> PolarsResult<Vec<CategoryValue>> {
    let series = column.as_materialized_series();
    let dtype = series.dtype();

    if *dtype == DataType::Boolean {
        return Ok(series.bool()?.into_iter().map(CategoryValue::from).collect());
    }
    if dtype.is_integer() {
        let cast = series.strict_cast(&DataType::Int64)?;
        return Ok(cast.i64()?.into_iter().map(CategoryValue::from).collect());
    }
    if *dtype == DataType::Float32 {
        return Ok(series
            .f32()?
            .into_iter()
            .map(|value| CategoryValue::from(value.map(widen_f32)))
            .collect());
    }
    if dtype.is_float() {
        let cast = series.cast(&DataType::Float64)?;
        return Ok(cast.f64()?.into_iter().map(CategoryValue::from).collect());
    }

    let cast = series.cast(&DataType::String)?;
    Ok(cast.str()?.into_iter().map(CategoryValue::from).collect())
}

/// Widens an `f32` to the `f64` with the same shortest decimal form.
///
/// A plain `f64::from` keeps the binary error of the narrow type, so `0.1_f32`
/// would label as `0.10000000149011612`; this yields `0.1`.
///
/// # Examples
///
/// ```
/// use catenc_common::widen_f32;
///
/// assert_eq!(widen_f32(0.1), 0.1_f64);
/// assert!(widen_f32(f32::NAN).is_nan());
/// ```
pub fn widen_f32(value: f32) -> f64 {
    if !value.is_finite() {
        return f64::from(value);
    }
    value
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(value))
}
