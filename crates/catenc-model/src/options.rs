//! Configuration options for encoding passes.

use serde::{Deserialize, Serialize};

/// Separator placed between the source column name and the category label
/// in generated one-hot column names.
pub const DEFAULT_SEPARATOR: &str = "_";

/// What apply does with a value that was not observed at fit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnseenCategoryPolicy {
    /// Fail the whole call with an unseen-category error.
    #[default]
    Strict,
    /// Label encoding writes the sentinel code `-1`; one-hot encoding writes
    /// an all-zero indicator row.
    Lenient,
}

/// Options for fit and apply calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Unseen-category handling at apply time.
    pub unseen: UnseenCategoryPolicy,

    /// Separator for one-hot output names, e.g. `color` + `_` + `red`.
    /// Only consulted at fit time; fitted states carry their names.
    pub separator: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            unseen: UnseenCategoryPolicy::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with the opt-in lenient unseen-category policy.
    pub fn lenient() -> Self {
        Self {
            unseen: UnseenCategoryPolicy::Lenient,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_unseen(mut self, policy: UnseenCategoryPolicy) -> Self {
        self.unseen = policy;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Label code written for unseen values under [`UnseenCategoryPolicy::Lenient`].
pub const UNSEEN_LABEL_CODE: i64 = -1;
