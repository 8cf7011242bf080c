//! Mapping definitions.
//!
//! Mappings define, per field name, the declared value type and whether the
//! field is intended for sorting.
//!
//! ```
//! use ordo::schema::{FieldMapping, Mappings};
//!
//! let mappings = Mappings::new()
//!     .with_field("name", FieldMapping::text())
//!     .with_field("popularity", FieldMapping::integer().sortable(true));
//!
//! assert_eq!(mappings.text_fields(), vec!["name"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::document::Fields;
use crate::error::{ConversionError, OrdoError};

/// Declared type of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Tokenized into the inverted index; sorts case-insensitively.
    #[default]
    Text,
    /// Not tokenized; sorts numerically.
    Integer,
}

impl FieldType {
    /// Name used in mappings and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = OrdoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "integer" | "int" => Ok(FieldType::Integer),
            other => Err(OrdoError::schema(format!("unknown field type {other:?}"))),
        }
    }
}

/// Field mapping configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether the field is intended for sorting. Advisory only.
    #[serde(default)]
    pub sortable: bool,
}

impl FieldMapping {
    /// A text field mapping.
    pub fn text() -> Self {
        FieldMapping {
            field_type: FieldType::Text,
            sortable: false,
        }
    }

    /// An integer field mapping.
    pub fn integer() -> Self {
        FieldMapping {
            field_type: FieldType::Integer,
            sortable: false,
        }
    }

    /// Set the sortable flag.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }
}

/// Field mappings keyed by field name.
///
/// Iteration is in field-name order so index builds are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mappings {
    fields: BTreeMap<String, FieldMapping>,
}

impl Mappings {
    /// Create empty mappings.
    pub fn new() -> Self {
        Mappings {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field mapping (builder style).
    pub fn with_field<S: Into<String>>(mut self, name: S, mapping: FieldMapping) -> Self {
        self.insert(name, mapping);
        self
    }

    /// Add or replace a field mapping.
    pub fn insert<S: Into<String>>(&mut self, name: S, mapping: FieldMapping) {
        self.fields.insert(name.into(), mapping);
    }

    /// Get the mapping of a field.
    pub fn get(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.get(name)
    }

    /// Names of all fields mapped as text, in name order.
    pub fn text_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, m)| m.field_type == FieldType::Text)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Iterate over all mappings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMapping)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of mapped fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field is mapped.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check that every mapped field is present in `fields` with its declared type.
    ///
    /// Unmapped fields are not inspected.
    pub fn validate(&self, fields: &Fields) -> Result<(), ConversionError> {
        for (name, mapping) in &self.fields {
            check_type(name, mapping.field_type, fields)?;
        }
        Ok(())
    }
}

/// Check a single field of `fields` against `expected`.
pub(crate) fn check_type(
    name: &str,
    expected: FieldType,
    fields: &Fields,
) -> Result<(), ConversionError> {
    match fields.get(name) {
        None => Err(ConversionError::MissingField {
            field: name.to_string(),
            expected,
        }),
        Some(value) if value.field_type() != expected => Err(ConversionError::TypeMismatch {
            field: name.to_string(),
            expected,
            found: value.field_type().to_string(),
        }),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_mappings() -> Mappings {
        Mappings::new()
            .with_field("name", FieldMapping::text())
            .with_field("popularity", FieldMapping::integer().sortable(true))
    }

    #[test]
    fn test_validate_accepts_matching_document() {
        let fields = Fields::new()
            .with_text("name", "thing")
            .with_integer("popularity", 1)
            .with_text("unmapped", "anything");
        assert!(product_mappings().validate(&fields).is_ok());
    }

    #[test]
    fn test_validate_missing_field() {
        let fields = Fields::new().with_text("name", "thing");
        let err = product_mappings().validate(&fields).unwrap_err();
        assert_eq!(
            err,
            ConversionError::MissingField {
                field: "popularity".to_string(),
                expected: FieldType::Integer,
            }
        );
    }

    #[test]
    fn test_validate_type_mismatch() {
        let fields = Fields::new()
            .with_integer("name", 3)
            .with_integer("popularity", 1);
        let err = product_mappings().validate(&fields).unwrap_err();
        assert_eq!(
            err,
            ConversionError::TypeMismatch {
                field: "name".to_string(),
                expected: FieldType::Text,
                found: "integer".to_string(),
            }
        );
    }

    #[test]
    fn test_field_type_parsing() {
        assert_eq!("TEXT".parse::<FieldType>().unwrap(), FieldType::Text);
        assert_eq!("int".parse::<FieldType>().unwrap(), FieldType::Integer);
        assert!("float".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_mappings_json() {
        let mappings: Mappings = serde_json::from_str(
            r#"{"name":{"type":"text"},"popularity":{"type":"integer","sortable":true}}"#,
        )
        .unwrap();
        assert_eq!(mappings, product_mappings());
        assert_eq!(mappings.len(), 2);
        assert!(mappings.get("popularity").unwrap().sortable);
    }
}
