//! Fitted encoder state for a single column.
//!
//! Both state types keep their categories sorted in canonical order and
//! de-duplicated, so a category's position is its code (label encoding) or
//! its output-column index (one-hot encoding). Lookups are binary searches.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::category::CategoryValue;
use crate::error::{Result, StateError};

/// Sort and de-duplicate observed values into canonical category order.
pub fn distinct_sorted<I>(values: I) -> Vec<CategoryValue>
where
    I: IntoIterator<Item = CategoryValue>,
{
    values.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

fn check_sorted(categories: &[CategoryValue]) -> Result<()> {
    match categories.windows(2).position(|pair| pair[0] >= pair[1]) {
        Some(index) => Err(StateError::UnsortedCategories { index: index + 1 }),
        None => Ok(()),
    }
}

/// Label encoder state: category at index `i` has code `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LabelEncoderStateRepr")]
pub struct LabelEncoderState {
    categories: Vec<CategoryValue>,
}

#[derive(Deserialize)]
struct LabelEncoderStateRepr {
    categories: Vec<CategoryValue>,
}

impl TryFrom<LabelEncoderStateRepr> for LabelEncoderState {
    type Error = StateError;

    fn try_from(repr: LabelEncoderStateRepr) -> Result<Self> {
        Self::from_categories(repr.categories)
    }
}

impl LabelEncoderState {
    /// Learn the category set from the values of one column.
    pub fn fit<I>(values: I) -> Self
    where
        I: IntoIterator<Item = CategoryValue>,
    {
        Self {
            categories: distinct_sorted(values),
        }
    }

    /// Rebuild a state from an already-sorted category list.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnsortedCategories`] if the list is not strictly
    /// increasing in canonical order.
    pub fn from_categories(categories: Vec<CategoryValue>) -> Result<Self> {
        check_sorted(&categories)?;
        Ok(Self { categories })
    }

    /// Categories in code order.
    pub fn categories(&self) -> &[CategoryValue] {
        &self.categories
    }

    /// Number of categories (`k`); codes span `0..k`.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Code assigned to `value`, or `None` if it was not seen at fit.
    pub fn code_of(&self, value: &CategoryValue) -> Option<usize> {
        self.categories.binary_search(value).ok()
    }

    /// Category behind `code`, the inverse of [`Self::code_of`].
    pub fn category_of(&self, code: usize) -> Option<&CategoryValue> {
        self.categories.get(code)
    }
}

/// One-hot encoder state: category at index `i` feeds output column `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OneHotEncoderStateRepr")]
pub struct OneHotEncoderState {
    categories: Vec<CategoryValue>,
    output_columns: Vec<String>,
}

#[derive(Deserialize)]
struct OneHotEncoderStateRepr {
    categories: Vec<CategoryValue>,
    output_columns: Vec<String>,
}

impl TryFrom<OneHotEncoderStateRepr> for OneHotEncoderState {
    type Error = StateError;

    fn try_from(repr: OneHotEncoderStateRepr) -> Result<Self> {
        Self::from_parts(repr.categories, repr.output_columns)
    }
}

impl OneHotEncoderState {
    /// Learn the category set of `column` and name one output per category
    /// as `{column}{separator}{category}`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateOutputColumn`] when two categories
    /// render to the same name, e.g. the text `"null"` next to a missing
    /// value.
    pub fn fit<I>(column: &str, values: I, separator: &str) -> Result<Self>
    where
        I: IntoIterator<Item = CategoryValue>,
    {
        let categories = distinct_sorted(values);
        let output_columns = categories
            .iter()
            .map(|category| format!("{column}{separator}{category}"))
            .collect();
        Self::from_parts(categories, output_columns)
    }

    /// Rebuild a state from sorted categories and their output names.
    ///
    /// # Errors
    ///
    /// Fails if categories are not strictly increasing, if the name count
    /// differs from the category count, or if a name repeats.
    pub fn from_parts(categories: Vec<CategoryValue>, output_columns: Vec<String>) -> Result<Self> {
        check_sorted(&categories)?;
        if categories.len() != output_columns.len() {
            return Err(StateError::OutputCountMismatch {
                categories: categories.len(),
                outputs: output_columns.len(),
            });
        }
        let mut seen = HashSet::with_capacity(output_columns.len());
        for name in &output_columns {
            if !seen.insert(name.as_str()) {
                return Err(StateError::DuplicateOutputColumn { name: name.clone() });
            }
        }
        Ok(Self {
            categories,
            output_columns,
        })
    }

    /// Categories in output-column order.
    pub fn categories(&self) -> &[CategoryValue] {
        &self.categories
    }

    /// Generated output column names, one per category.
    pub fn output_columns(&self) -> &[String] {
        &self.output_columns
    }

    /// Number of indicator columns this state produces.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Index of the indicator column that is hot for `value`.
    pub fn position_of(&self, value: &CategoryValue) -> Option<usize> {
        self.categories.binary_search(value).ok()
    }
}
