//! Field value types for documents.
//!
//! [`FieldValue`] is a closed variant so that type checks happen once, when a
//! document is validated against the mappings, instead of on every comparison.
//!
//! Values serialize untagged: a JSON string is text and a JSON integer is an
//! integer.
//!
//! ```
//! use ordo::document::field_value::FieldValue;
//!
//! let value: FieldValue = serde_json::from_str("42").unwrap();
//! assert_eq!(value, FieldValue::Integer(42));
//!
//! let value: FieldValue = serde_json::from_str("\"spiderman\"").unwrap();
//! assert_eq!(value.as_text(), Some("spiderman"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::FieldType;

/// Represents a value for a field in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
}

impl FieldValue {
    /// Get the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The type this value would satisfy in a mapping.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Integer(_) => FieldType::Integer,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}
