//! Total-order comparison of documents under a sort specification.

use std::cmp::Ordering;
use std::sync::Arc;

use log::{debug, warn};

use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::ConversionError;
use crate::schema::{FieldType, Mappings};
use crate::sort::spec::{SortOrder, SortSpec};

/// A single extracted sort value. Text is stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    /// Lowercased text, compared by code point.
    Text(String),
    /// Integer, compared numerically.
    Integer(i64),
}

/// The values of one document for every effective rule of a spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey(Vec<SortValue>);

impl SortKey {
    /// The extracted values, one per effective rule.
    pub fn values(&self) -> &[SortValue] {
        &self.0
    }
}

#[derive(Debug, Clone)]
struct ResolvedRule {
    field: String,
    field_type: FieldType,
    order: SortOrder,
}

/// Compares documents rule by rule under a [`SortSpec`].
///
/// Rules naming a field without a mapping have no type to compare by and are
/// skipped. Every document must carry a value of the declared type for every
/// remaining rule, otherwise extraction fails with a [`ConversionError`].
#[derive(Debug, Clone)]
pub struct SortComparator {
    rules: Vec<ResolvedRule>,
}

impl SortComparator {
    /// Resolve the rules of `spec` against `mappings`.
    pub fn new(spec: &SortSpec, mappings: &Mappings) -> Self {
        let rules = spec
            .rules()
            .iter()
            .filter_map(|rule| match mappings.get(&rule.field) {
                Some(mapping) => {
                    if !mapping.sortable {
                        debug!("sorting on field {:?} not marked sortable", rule.field);
                    }
                    Some(ResolvedRule {
                        field: rule.field.clone(),
                        field_type: mapping.field_type,
                        order: rule.order,
                    })
                }
                None => {
                    warn!("ignoring sort rule on unmapped field {:?}", rule.field);
                    None
                }
            })
            .collect();

        SortComparator { rules }
    }

    /// Number of rules that take part in comparisons.
    pub fn effective_rules(&self) -> usize {
        self.rules.len()
    }

    /// Extract the sort key of a document.
    pub fn sort_key(&self, document: &Document) -> Result<SortKey, ConversionError> {
        self.rules
            .iter()
            .map(|rule| {
                let value = document.get_field(&rule.field).ok_or_else(|| {
                    ConversionError::MissingField {
                        field: rule.field.clone(),
                        expected: rule.field_type,
                    }
                })?;
                match (rule.field_type, value) {
                    (FieldType::Text, FieldValue::Text(s)) => Ok(SortValue::Text(s.to_lowercase())),
                    (FieldType::Integer, FieldValue::Integer(i)) => Ok(SortValue::Integer(*i)),
                    (expected, other) => Err(ConversionError::TypeMismatch {
                        field: rule.field.clone(),
                        expected,
                        found: other.field_type().to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(SortKey)
    }

    /// Compare two extracted keys. The first unequal rule decides.
    pub fn compare_keys(&self, a: &SortKey, b: &SortKey) -> Ordering {
        for ((rule, va), vb) in self.rules.iter().zip(&a.0).zip(&b.0) {
            let ordering = match rule.order {
                SortOrder::Asc => va.cmp(vb),
                SortOrder::Desc => vb.cmp(va),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Compare two documents.
    pub fn compare(&self, a: &Document, b: &Document) -> Result<Ordering, ConversionError> {
        Ok(self.compare_keys(&self.sort_key(a)?, &self.sort_key(b)?))
    }

    /// Sort documents in place. Keys are extracted once per document; the
    /// first conversion failure aborts and leaves `documents` untouched.
    pub fn sort(&self, documents: &mut Vec<Arc<Document>>) -> Result<(), ConversionError> {
        if self.rules.is_empty() {
            return Ok(());
        }

        let mut keyed = documents
            .iter()
            .map(|doc| Ok((self.sort_key(doc)?, Arc::clone(doc))))
            .collect::<Result<Vec<_>, ConversionError>>()?;

        keyed.sort_by(|(a, _), (b, _)| self.compare_keys(a, b));
        *documents = keyed.into_iter().map(|(_, doc)| doc).collect();
        Ok(())
    }
}
