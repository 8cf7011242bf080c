//! AND-query evaluation over a sort-aware index.
//!
//! - [`query::Query`] - Text clauses plus the sort spec that picks the index
//! - [`searcher::Searcher`] - Walks postings lists and emits matches in index order
//! - [`results::SearchResults`] - Ordered hits with their documents

pub mod query;
pub mod results;
pub mod searcher;
