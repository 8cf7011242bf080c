//! Inverted index built for a single sort specification.

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::document::field_value::FieldValue;
use crate::error::{ConversionError, Result};
use crate::index::postings::PostingsList;
use crate::schema::{FieldType, Mappings};
use crate::sort::{SortComparator, SortSpec};
use crate::store::DocumentStore;

/// Field → term → postings, with every postings list in sort-spec order.
///
/// Built once from a snapshot of the store and never updated in place.
#[derive(Debug, Clone)]
pub struct InvertedIndex {
    sort_spec: SortSpec,
    key: String,
    postings: AHashMap<String, AHashMap<String, PostingsList>>,
    doc_count: usize,
}

impl InvertedIndex {
    /// Build an index over every document currently in `store`.
    ///
    /// Documents are visited in the order defined by `sort_spec` (store order
    /// when the spec is empty). Each text-mapped field is analyzed and the
    /// document id is appended to the postings list of every distinct term.
    ///
    /// A document lacking a text value for a text-mapped field, or lacking a
    /// typed value for a sort field, fails the whole build.
    pub fn build(
        sort_spec: &SortSpec,
        store: &DocumentStore,
        mappings: &Mappings,
        analyzer: &dyn Analyzer,
    ) -> Result<Self> {
        let mut documents = store.snapshot();
        SortComparator::new(sort_spec, mappings).sort(&mut documents)?;

        let text_fields = mappings.text_fields();
        let mut postings = AHashMap::with_capacity(text_fields.len());

        for field in text_fields {
            let mut terms: AHashMap<String, PostingsList> = AHashMap::new();
            for document in &documents {
                let text = match document.get_field(field) {
                    Some(FieldValue::Text(text)) => text,
                    Some(other) => {
                        return Err(ConversionError::TypeMismatch {
                            field: field.to_string(),
                            expected: FieldType::Text,
                            found: other.field_type().to_string(),
                        }
                        .into());
                    }
                    None => {
                        return Err(ConversionError::MissingField {
                            field: field.to_string(),
                            expected: FieldType::Text,
                        }
                        .into());
                    }
                };

                let mut seen = AHashSet::new();
                for term in analyzer.terms(text)? {
                    if seen.insert(term.clone()) {
                        terms.entry(term).or_default().push(document.id());
                    }
                }
            }
            postings.insert(field.to_string(), terms);
        }

        let index = InvertedIndex {
            key: sort_spec.key(),
            sort_spec: sort_spec.clone(),
            postings,
            doc_count: documents.len(),
        };
        debug!(
            "built index {:?}: {} documents, {} terms",
            index.key,
            index.doc_count,
            index.term_count()
        );
        Ok(index)
    }

    /// Postings of `term` in `field`, if the term occurs there.
    pub fn postings(&self, field: &str, term: &str) -> Option<&PostingsList> {
        self.postings.get(field).and_then(|terms| terms.get(term))
    }

    /// The sort specification this index was built for.
    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort_spec
    }

    /// Label of the sort specification, see [`SortSpec::key`].
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of documents the store held when this index was built.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct (field, term) pairs.
    pub fn term_count(&self) -> usize {
        self.postings.values().map(|terms| terms.len()).sum()
    }

    /// Distinct terms of one field, in arbitrary order.
    pub fn terms(&self, field: &str) -> impl Iterator<Item = &str> {
        self.postings
            .get(field)
            .into_iter()
            .flat_map(|terms| terms.keys().map(String::as_str))
    }
}
