//! The search engine: mappings, documents and the index cache in one value.

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::config::{EngineConfig, StalenessPolicy};
use crate::document::document::{DocId, Document, Fields};
use crate::error::{OrdoError, Result};
use crate::index::manager::{IndexCacheStats, IndexManager};
use crate::schema::Mappings;
use crate::search::query::Query;
use crate::search::results::{SearchHit, SearchResults};
use crate::search::searcher::Searcher;
use crate::sort::SortSpec;
use crate::store::DocumentStore;

/// Size of one resolved index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexInfo {
    /// Label of the sort spec the index was built for.
    pub key: String,
    /// Documents the index was built from.
    pub doc_count: usize,
    /// Distinct (field, term) pairs.
    pub term_count: usize,
}

/// An in-memory search engine that keeps one index per result order.
///
/// Queries never sort: the first query for a [`SortSpec`] builds an index
/// whose postings lists are already in that order, and later queries with
/// the same spec reuse it.
///
/// ```
/// use ordo::document::document::Fields;
/// use ordo::engine::SearchEngine;
/// use ordo::schema::{FieldMapping, Mappings};
/// use ordo::search::query::Query;
/// use ordo::sort::SortSpec;
///
/// let mut engine = SearchEngine::default();
/// engine.configure(Mappings::new().with_field("name", FieldMapping::text()));
/// engine.index(Fields::new().with_text("name", "c thing")).unwrap();
/// engine.index(Fields::new().with_text("name", "a thing")).unwrap();
///
/// let query = Query::text("name", "thing").sorted_by(SortSpec::new().asc("name"));
/// let results = engine.search(&query).unwrap();
/// assert_eq!(results.text_values("name"), vec!["a thing", "c thing"]);
/// ```
#[derive(Debug)]
pub struct SearchEngine {
    config: EngineConfig,
    mappings: Mappings,
    store: DocumentStore,
    indexes: IndexManager,
    analyzer: Arc<dyn Analyzer>,
}

impl SearchEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let analyzer: Arc<dyn Analyzer> = match &config.stop_words {
            Some(words) => Arc::new(StandardAnalyzer::with_stop_words(words.iter().cloned())),
            None => Arc::new(StandardAnalyzer::new()),
        };
        Ok(Self::with_analyzer(config, analyzer))
    }

    /// Create an engine that analyzes text with a custom analyzer.
    ///
    /// The configured stop words are ignored; the analyzer decides.
    pub fn with_analyzer(config: EngineConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        SearchEngine {
            indexes: IndexManager::new(config.cache.clone()),
            config,
            mappings: Mappings::new(),
            store: DocumentStore::new(),
            analyzer,
        }
    }

    /// Replace the field mappings.
    ///
    /// Documents already stored are not re-validated. Under
    /// [`StalenessPolicy::RebuildOnNextQuery`] cached indexes are dropped so the
    /// next query sees the new mappings. Under [`StalenessPolicy::Frozen`] they
    /// are kept as built until [`invalidate`](Self::invalidate) or
    /// [`invalidate_all`](Self::invalidate_all) is called.
    pub fn configure(&mut self, mappings: Mappings) {
        if !self.store.is_empty() {
            debug!(
                "mappings replaced after {} documents were indexed",
                self.store.len()
            );
        }
        self.mappings = mappings;
        if self.config.cache.staleness == StalenessPolicy::RebuildOnNextQuery {
            self.indexes.invalidate_all();
        }
    }

    /// The field mappings in effect.
    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }

    /// The configuration the engine was created with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Store a record and return its id.
    ///
    /// Every mapped field must be present with its declared type; otherwise
    /// nothing is stored. Unmapped fields are kept but never indexed.
    pub fn index(&mut self, fields: Fields) -> Result<DocId> {
        self.mappings.validate(&fields)?;
        Ok(self.store.put(fields))
    }

    /// Store records in order, stopping at the first one that fails.
    ///
    /// Records before the failing one stay stored.
    pub fn index_all<I>(&mut self, records: I) -> Result<Vec<DocId>>
    where
        I: IntoIterator<Item = Fields>,
    {
        records.into_iter().map(|fields| self.index(fields)).collect()
    }

    /// Look up a stored document.
    pub fn get(&self, id: DocId) -> Option<Arc<Document>> {
        self.store.get(id).cloned()
    }

    /// Run a query.
    ///
    /// Builds the index for `query.sort` first if it is not cached or is
    /// stale. Unknown terms and unmapped fields give empty results, not errors.
    pub fn search(&mut self, query: &Query) -> Result<SearchResults> {
        let index = self.indexes.resolve(
            &query.sort,
            &self.store,
            &self.mappings,
            self.analyzer.as_ref(),
        )?;
        let doc_ids = Searcher::new(index, self.analyzer.as_ref()).search(&query.text)?;

        let hits = doc_ids
            .into_iter()
            .map(|doc_id| {
                let document = self.store.get(doc_id).cloned().ok_or_else(|| {
                    OrdoError::other(format!("index refers to unknown document {doc_id}"))
                })?;
                Ok(SearchHit { doc_id, document })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchResults {
            total_hits: hits.len(),
            hits,
            index_key: index.key().to_string(),
        })
    }

    /// Resolve the index for `spec` and describe it.
    pub fn index_info(&mut self, spec: &SortSpec) -> Result<IndexInfo> {
        let index = self.indexes.resolve(
            spec,
            &self.store,
            &self.mappings,
            self.analyzer.as_ref(),
        )?;
        Ok(IndexInfo {
            key: index.key().to_string(),
            doc_count: index.doc_count(),
            term_count: index.term_count(),
        })
    }

    /// Drop the cached index for `spec`. Returns whether one was cached.
    pub fn invalidate(&mut self, spec: &SortSpec) -> bool {
        self.indexes.invalidate(spec)
    }

    /// Drop every cached index.
    pub fn invalidate_all(&mut self) {
        self.indexes.invalidate_all();
    }

    /// Index cache counters.
    pub fn cache_stats(&self) -> IndexCacheStats {
        self.indexes.stats()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_analyzer(EngineConfig::default(), Arc::new(StandardAnalyzer::new()))
    }
}
