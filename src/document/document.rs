//! Document structure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::field_value::FieldValue;

/// Identifier assigned to a document by the store, starting at 0.
pub type DocId = u64;

/// The field values of a document, keyed by field name.
///
/// This is what callers submit for indexing. Fields can be added dynamically;
/// only fields with a mapping take part in indexing and sorting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    values: HashMap<String, FieldValue>,
}

impl Fields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Fields {
            values: HashMap::new(),
        }
    }

    /// Add a text field.
    pub fn with_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.insert(name, FieldValue::Text(value.into()));
        self
    }

    /// Add an integer field.
    pub fn with_integer<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.insert(name, FieldValue::Integer(value));
        self
    }

    /// Insert a field value, returning the previous one.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: FieldValue) -> Option<FieldValue> {
        self.values.insert(name.into(), value)
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Iterate over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, FieldValue>> for Fields {
    fn from(values: HashMap<String, FieldValue>) -> Self {
        Fields { values }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Fields {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A stored document.
///
/// Documents are immutable once indexed and are shared out of the store as
/// `Arc<Document>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: DocId,
    fields: Fields,
}

impl Document {
    pub(crate) fn new(id: DocId, fields: Fields) -> Self {
        Document { id, fields }
    }

    /// The id assigned at indexing time.
    pub fn id(&self) -> DocId {
        self.id
    }

    /// Get a field value from the document.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Get a text field, if present and of text type.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get_field(name).and_then(FieldValue::as_text)
    }

    /// All field values.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_builder() {
        let fields = Fields::new()
            .with_text("name", "some thing")
            .with_integer("popularity", 10);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("name"), Some(&FieldValue::from("some thing")));
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn test_fields_from_iter() {
        let fields: Fields = vec![("name", "batman")].into_iter().collect();
        assert_eq!(fields.get("name").and_then(FieldValue::as_text), Some("batman"));
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_fields_json_is_a_plain_object() {
        let fields: Fields = serde_json::from_str(r#"{"name":"dog house","popularity":3}"#).unwrap();
        assert_eq!(fields.get("popularity"), Some(&FieldValue::Integer(3)));

        let doc = Document::new(4, fields);
        assert_eq!(doc.id(), 4);
        assert_eq!(doc.get_text("name"), Some("dog house"));
        assert_eq!(doc.get_text("popularity"), None);
    }
}
