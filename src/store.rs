//! Append-only document store.

use std::sync::Arc;

use crate::document::document::{DocId, Document, Fields};

/// Owns every indexed document, keyed by a monotonically increasing id.
///
/// Ids start at 0 and equal the insertion position, so both `put` and `get`
/// are O(1) amortized. There is no update or delete.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<Arc<Document>>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        DocumentStore {
            documents: Vec::new(),
        }
    }

    /// Store the fields unchanged under the next id and return that id.
    pub fn put(&mut self, fields: Fields) -> DocId {
        let id = self.documents.len() as DocId;
        self.documents.push(Arc::new(Document::new(id, fields)));
        id
    }

    /// Get a document by id.
    pub fn get(&self, id: DocId) -> Option<&Arc<Document>> {
        usize::try_from(id).ok().and_then(|i| self.documents.get(i))
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over documents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Document>> {
        self.documents.iter()
    }

    /// All documents currently stored, in id order.
    pub fn snapshot(&self) -> Vec<Arc<Document>> {
        self.documents.clone()
    }
}
