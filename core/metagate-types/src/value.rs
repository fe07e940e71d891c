//! Metadata values and their declared shapes.
//!
//! Every exposed field declares a primitive [`ValueType`] and a
//! [`Cardinality`]. The registry never interprets values beyond that tag;
//! deeper sanitization belongs to the host's storage layer.

use serde::{Deserialize, Serialize};

/// Primitive type tag for a field's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Integer,
    Number,
    Boolean,
}

/// Whether a field holds exactly one value or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    #[default]
    Single,
    Multiple,
}

/// A metadata value carried in REST payloads.
///
/// Deserialized untagged from JSON; the `Integer` arm is tried before
/// `Number` so whole numbers keep their integer representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
    List(Vec<MetaValue>),
}

impl MetaValue {
    /// Whether this value is a scalar of the given primitive type.
    #[must_use]
    pub fn is_scalar_of(&self, value_type: ValueType) -> bool {
        matches!(
            (self, value_type),
            (Self::String(_), ValueType::String)
                | (Self::Integer(_), ValueType::Integer)
                | (Self::Integer(_), ValueType::Number)
                | (Self::Number(_), ValueType::Number)
                | (Self::Boolean(_), ValueType::Boolean)
        )
    }

    /// Checks the value against a declared shape.
    ///
    /// `Single` requires a scalar of the declared type; `Multiple` requires
    /// a list whose every element is such a scalar. An empty list is a
    /// valid `Multiple` value.
    pub fn check_shape(&self, value_type: ValueType, cardinality: Cardinality) -> crate::Result<()> {
        let ok = match cardinality {
            Cardinality::Single => self.is_scalar_of(value_type),
            Cardinality::Multiple => match self {
                Self::List(items) => items.iter().all(|v| v.is_scalar_of(value_type)),
                _ => false,
            },
        };

        if ok {
            Ok(())
        } else {
            Err(crate::Error::ValueShape(format!(
                "expected {cardinality:?} {value_type:?}, got {self:?}"
            )))
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
