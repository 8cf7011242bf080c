//! Postings lists.

use crate::document::document::DocId;

/// Document ids containing one term of one field, in index build order.
///
/// A document appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingsList {
    doc_ids: Vec<DocId>,
}

impl PostingsList {
    /// Create an empty list.
    pub fn new() -> Self {
        PostingsList {
            doc_ids: Vec::new(),
        }
    }

    /// Append a document. Appending the document that is already last is a no-op.
    pub fn push(&mut self, doc_id: DocId) {
        if self.doc_ids.last() != Some(&doc_id) {
            self.doc_ids.push(doc_id);
        }
    }

    /// Iterate over ids in build order.
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.doc_ids.iter().copied()
    }

    /// The ids as a slice.
    pub fn as_slice(&self) -> &[DocId] {
        &self.doc_ids
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_skips_repeat() {
        let mut list = PostingsList::new();
        list.push(2);
        list.push(0);
        list.push(0);
        list.push(1);

        assert_eq!(list.as_slice(), &[2, 0, 1]);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![2, 0, 1]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }
}
