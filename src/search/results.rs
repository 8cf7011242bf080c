//! Search result types.

use std::sync::Arc;

use crate::document::document::{DocId, Document};

/// One matching document.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The document ID.
    pub doc_id: DocId,
    /// The stored document.
    pub document: Arc<Document>,
}

/// Matching documents in result order.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    /// The search hits, in the order of the resolved index.
    pub hits: Vec<SearchHit>,
    /// Total number of matching documents.
    pub total_hits: usize,
    /// Cache key of the index that answered the query.
    pub index_key: String,
}

impl SearchResults {
    /// Ids of the hits, in order.
    pub fn doc_ids(&self) -> Vec<DocId> {
        self.hits.iter().map(|hit| hit.doc_id).collect()
    }

    /// Documents of the hits, in order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.hits.iter().map(|hit| hit.document.as_ref())
    }

    /// Values of a text field across the hits, in order. Hits without the
    /// field are skipped.
    pub fn text_values<'a>(&'a self, field: &'a str) -> Vec<&'a str> {
        self.documents().filter_map(|doc| doc.get_text(field)).collect()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of hits.
    pub fn len(&self) -> usize {
        self.hits.len()
    }
}
