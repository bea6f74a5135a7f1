//! Canonical category values.
//!
//! A [`CategoryValue`] is the hashable, totally ordered form of a single
//! cell. Encoder states store categories in this form so that lookups do not
//! depend on the dtype of the frame they were read from.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single categorical value observed in a column.
///
/// Ordering is canonical: values of the same variant use their natural order
/// (floats via [`f64::total_cmp`]), and variants order as
/// `Bool < Int < Float < Text < Null`, so missing values always sort last.
///
/// Floats are compared on a normalized key: `-0.0` equals `0.0`, and every
/// NaN equals every other NaN.
///
/// Finite floats serialize as numbers; `NaN`, `inf` and `-inf` serialize as
/// those strings, since JSON has no literal for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CategoryValue {
    Bool(bool),
    Int(i64),
    #[serde(with = "float_repr")]
    Float(f64),
    Text(String),
    Null,
}

impl CategoryValue {
    /// Build a float category with the normalized representation.
    pub fn float(value: f64) -> Self {
        Self::Float(normalize_float(value))
    }

    /// Build a text category.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for the missing-value category.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) => 1,
            Self::Float(_) => 2,
            Self::Text(_) => 3,
            Self::Null => 4,
        }
    }
}

fn normalize_float(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

mod float_repr {
    use serde::{Deserialize, Deserializer, Serializer, de};

    const NAN: &str = "NaN";
    const INFINITY: &str = "inf";
    const NEG_INFINITY: &str = "-inf";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Label(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value.is_infinite() {
            let label = if value.is_sign_positive() { INFINITY } else { NEG_INFINITY };
            serializer.serialize_str(label)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Label(label) => match label.as_str() {
                NAN => Ok(f64::NAN),
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!("invalid float category '{other}'"))),
            },
        }
    }
}

impl Ord for CategoryValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => {
                normalize_float(*a).total_cmp(&normalize_float(*b))
            }
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CategoryValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CategoryValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CategoryValue {}

impl Hash for CategoryValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Bool(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::Float(v) => normalize_float(*v).to_bits().hash(state),
            Self::Text(v) => v.hash(state),
            Self::Null => {}
        }
    }
}

/// Renders the label used in generated column names and error messages.
///
/// Floats use Rust's shortest round-trip form, so `1.0` renders as `1` and
/// `2.5` as `2.5`. Missing values render as `null`.
impl fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{}", normalize_float(*v)),
            Self::Text(v) => f.write_str(v),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for CategoryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CategoryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CategoryValue {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl From<&str> for CategoryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CategoryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for CategoryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
