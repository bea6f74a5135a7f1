//! Value types for categorical encoding.
//!
//! Everything a fit call learns lives in this crate as plain, serializable
//! data: [`CategoryValue`]s, the per-column [`LabelEncoderState`] and
//! [`OneHotEncoderState`], and the [`EncoderRegistry`] that maps column names
//! to them. None of these types touch a DataFrame, so registries can be
//! inspected, persisted by the caller and tested on their own.

pub mod category;
pub mod error;
pub mod options;
pub mod registry;
pub mod state;

pub use category::CategoryValue;
pub use error::{Result, StateError};
pub use options::{DEFAULT_SEPARATOR, EncodeOptions, UNSEEN_LABEL_CODE, UnseenCategoryPolicy};
pub use registry::{EncoderRegistry, LabelRegistry, OneHotRegistry, RegistryEntry};
pub use state::{LabelEncoderState, OneHotEncoderState, distinct_sorted};
