//! Lazy per-sort-spec index cache.
//!
//! The first query for a sort spec pays for sorting the whole store and
//! tokenizing every text field. Later queries with the same spec reuse the
//! cached index. Memory grows with the number of cached specs, which
//! [`IndexCacheConfig::max_indexes`] bounds.

use ahash::AHashMap;
use log::debug;
use serde::Serialize;

use crate::analysis::analyzer::Analyzer;
use crate::config::{IndexCacheConfig, StalenessPolicy};
use crate::error::{OrdoError, Result};
use crate::index::inverted::InvertedIndex;
use crate::schema::Mappings;
use crate::sort::SortSpec;
use crate::store::DocumentStore;

/// Counters describing cache behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexCacheStats {
    /// Indexes built, including rebuilds.
    pub builds: u64,
    /// Builds that replaced a stale index.
    pub rebuilds: u64,
    /// Resolutions served from the cache.
    pub cache_hits: u64,
    /// Indexes dropped to respect `max_indexes`.
    pub evictions: u64,
    /// Indexes currently cached.
    pub cached: usize,
}

#[derive(Debug)]
struct CachedIndex {
    index: InvertedIndex,
    last_used: u64,
}

/// Builds and caches one [`InvertedIndex`] per distinct [`SortSpec`].
///
/// Entries are keyed by the spec itself. [`SortSpec::key`] is only a label.
#[derive(Debug)]
pub struct IndexManager {
    config: IndexCacheConfig,
    indexes: AHashMap<SortSpec, CachedIndex>,
    clock: u64,
    stats: IndexCacheStats,
}

impl IndexManager {
    /// Create an empty cache with the given policy.
    pub fn new(config: IndexCacheConfig) -> Self {
        IndexManager {
            config,
            indexes: AHashMap::new(),
            clock: 0,
            stats: IndexCacheStats::default(),
        }
    }

    /// Return the index for `spec`, building it first if it is absent or stale.
    ///
    /// A failed build leaves the cache as it was.
    pub fn resolve(
        &mut self,
        spec: &SortSpec,
        store: &DocumentStore,
        mappings: &Mappings,
        analyzer: &dyn Analyzer,
    ) -> Result<&InvertedIndex> {
        self.clock += 1;

        let cached = self
            .indexes
            .get(spec)
            .map(|c| (self.is_stale(&c.index, store), c.index.doc_count()));
        match cached {
            Some((false, _)) => self.stats.cache_hits += 1,
            Some((true, built_from)) => {
                debug!(
                    "rebuilding stale index {:?} ({} new documents)",
                    spec.key(),
                    store.len() - built_from
                );
                let index = InvertedIndex::build(spec, store, mappings, analyzer)?;
                self.stats.builds += 1;
                self.stats.rebuilds += 1;
                self.insert(spec.clone(), index);
            }
            None => {
                let index = InvertedIndex::build(spec, store, mappings, analyzer)?;
                self.stats.builds += 1;
                self.make_room();
                self.insert(spec.clone(), index);
            }
        }

        let clock = self.clock;
        let entry = self
            .indexes
            .get_mut(spec)
            .ok_or_else(|| {
                OrdoError::other(format!("index {:?} missing after build", spec.key()))
            })?;
        entry.last_used = clock;
        Ok(&entry.index)
    }

    /// The cached index for `spec`, without building or touching recency.
    pub fn get(&self, spec: &SortSpec) -> Option<&InvertedIndex> {
        self.indexes.get(spec).map(|c| &c.index)
    }

    /// Drop the cached index for `spec`. Returns whether one was cached.
    pub fn invalidate(&mut self, spec: &SortSpec) -> bool {
        self.indexes.remove(spec).is_some()
    }

    /// Drop every cached index.
    pub fn invalidate_all(&mut self) {
        self.indexes.clear();
    }

    /// Number of cached indexes.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Snapshot of the cache counters.
    pub fn stats(&self) -> IndexCacheStats {
        IndexCacheStats {
            cached: self.indexes.len(),
            ..self.stats
        }
    }

    /// The cache policy in effect.
    pub fn config(&self) -> &IndexCacheConfig {
        &self.config
    }

    fn is_stale(&self, index: &InvertedIndex, store: &DocumentStore) -> bool {
        match self.config.staleness {
            StalenessPolicy::RebuildOnNextQuery => index.doc_count() < store.len(),
            StalenessPolicy::Frozen => false,
        }
    }

    fn insert(&mut self, spec: SortSpec, index: InvertedIndex) {
        self.indexes.insert(
            spec,
            CachedIndex {
                index,
                last_used: self.clock,
            },
        );
    }

    /// Evict least recently used indexes until one more fits.
    fn make_room(&mut self) {
        let Some(max) = self.config.max_indexes else {
            return;
        };
        while self.indexes.len() >= max.max(1) {
            let Some(oldest) = self
                .indexes
                .iter()
                .min_by_key(|(_, c)| c.last_used)
                .map(|(k, _)| k.clone())
            else {
                return;
            };
            debug!("evicting index {:?}", oldest.key());
            self.indexes.remove(&oldest);
            self.stats.evictions += 1;
        }
    }
}

impl Default for IndexManager {
    fn default() -> Self {
        Self::new(IndexCacheConfig::default())
    }
}
