//! Fit/apply categorical encoding over Polars DataFrames.
//!
//! Two encoder pairs share one shape: a fit call learns per-column state
//! from training data, encodes the frame in place and returns a registry;
//! the matching apply call reuses that registry on unseen data.
//!
//! - **label**: `fit_label_encode` / `apply_label_encode`
//! - **onehot**: `fit_onehot_encode` / `apply_onehot_encode`
//!
//! Apply is strict by default: a value the fit never saw fails the call.
//! [`EncodeOptions::lenient`](catenc_model::EncodeOptions::lenient) opts into
//! sentinel codes and all-zero indicator rows instead.

pub mod data_utils;
pub mod error;
pub mod label;
pub mod onehot;

pub use error::{EncodeError, Result};
pub use label::{apply_label_encode, apply_label_encode_with_options, fit_label_encode};
pub use onehot::{
    apply_onehot_encode, apply_onehot_encode_with_options, fit_onehot_encode,
    fit_onehot_encode_with_options,
};

// Re-export the model so callers need a single dependency
pub use catenc_model::{
    CategoryValue, EncodeOptions, LabelEncoderState, LabelRegistry, OneHotEncoderState,
    OneHotRegistry, UnseenCategoryPolicy,
};
