//! Per-pass registries of fitted encoder states.
//!
//! A registry is created by one fit call and read by the matching apply
//! call. Entries keep the order in which the fit call encoded its columns;
//! apply walks them in the same order so one-hot outputs line up.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, StateError};
use crate::state::{LabelEncoderState, OneHotEncoderState};

/// Registry produced by label encoding.
pub type LabelRegistry = EncoderRegistry<LabelEncoderState>;

/// Registry produced by one-hot encoding.
pub type OneHotRegistry = EncoderRegistry<OneHotEncoderState>;

/// A column name and the state fitted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry<S> {
    pub column: String,
    pub state: S,
}

/// Ordered mapping from column name to fitted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderRegistry<S> {
    entries: Vec<RegistryEntry<S>>,
}

impl<S> Default for EncoderRegistry<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> EncoderRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from entries, rejecting repeated column names.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateColumn`] for the first repeated name.
    pub fn from_entries(entries: Vec<RegistryEntry<S>>) -> Result<Self> {
        let mut registry = Self::new();
        for entry in entries {
            registry.insert(entry.column, entry.state)?;
        }
        Ok(registry)
    }

    /// Register `state` for `column`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateColumn`] if `column` is already present.
    pub fn insert(&mut self, column: impl Into<String>, state: S) -> Result<()> {
        let column = column.into();
        if self.contains(&column) {
            return Err(StateError::DuplicateColumn { column });
        }
        self.entries.push(RegistryEntry { column, state });
        Ok(())
    }

    pub fn get(&self, column: &str) -> Option<&S> {
        self.entries
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| &entry.state)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.iter().any(|entry| entry.column == column)
    }

    /// Registered columns in fit order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.column.as_str())
    }

    /// `(column, state)` pairs in fit order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> {
        self.entries
            .iter()
            .map(|entry| (entry.column.as_str(), &entry.state))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Serialize> Serialize for EncoderRegistry<S> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> std::result::Result<Se::Ok, Se::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for EncoderRegistry<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<RegistryEntry<S>>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
