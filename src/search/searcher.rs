//! Postings-walking AND evaluation.

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::document::document::DocId;
use crate::error::Result;
use crate::index::inverted::InvertedIndex;
use crate::search::query::TextClause;

/// Evaluates text clauses against one resolved index.
///
/// Results are never sorted here: a document is emitted the moment it has
/// matched every query term, so single-term results follow the index order
/// exactly. For multi-term queries the order is that in which documents
/// complete their last term while terms are scanned one after another, which
/// follows the chain order of the term that completes each match.
#[derive(Debug)]
pub struct Searcher<'a> {
    index: &'a InvertedIndex,
    analyzer: &'a dyn Analyzer,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over `index`, analyzing query strings with `analyzer`.
    pub fn new(index: &'a InvertedIndex, analyzer: &'a dyn Analyzer) -> Self {
        Searcher { index, analyzer }
    }

    /// Evaluate the first clause. Further clauses are ignored.
    pub fn search(&self, clauses: &[TextClause]) -> Result<Vec<DocId>> {
        let Some(clause) = clauses.first() else {
            return Ok(Vec::new());
        };
        if clauses.len() > 1 {
            debug!(
                "ignoring {} text clauses after the first (field {:?})",
                clauses.len() - 1,
                clause.field
            );
        }
        self.search_field(&clause.field, &clause.value)
    }

    /// Documents whose `field` contains every term of `query`.
    ///
    /// A term absent from the field's vocabulary ends the search with no
    /// results; terms after it are not inspected.
    pub fn search_field(&self, field: &str, query: &str) -> Result<Vec<DocId>> {
        let mut seen = AHashSet::new();
        let terms: Vec<String> = self
            .analyzer
            .terms(query)?
            .into_iter()
            .filter(|term| seen.insert(term.clone()))
            .collect();

        let required = terms.len();
        let mut matches: AHashMap<DocId, usize> = AHashMap::new();
        let mut results = Vec::new();

        for term in &terms {
            let Some(postings) = self.index.postings(field, term) else {
                debug!("term {term:?} not in field {field:?}");
                return Ok(Vec::new());
            };
            for doc_id in postings.iter() {
                let count = matches.entry(doc_id).or_insert(0);
                *count += 1;
                if *count == required {
                    results.push(doc_id);
                }
            }
        }

        Ok(results)
    }
}
