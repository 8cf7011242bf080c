//! # Ordo
//!
//! An in-memory full-text search library that returns results in the order
//! the caller asks for without sorting at query time.
//!
//! ## Features
//!
//! - Whitespace tokenization with lowercasing and English stop words
//! - Typed field mappings (text and integer) checked at insertion
//! - Multi-term AND queries
//! - One inverted index per sort specification, built on first use and cached
//! - Bounded index cache with a configurable staleness policy
//! - Bulk JSON and JSON-lines loading

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod schema;
pub mod search;
pub mod sort;
pub mod store;

pub mod prelude {
    pub use crate::config::{EngineConfig, IndexCacheConfig, StalenessPolicy};
    pub use crate::document::document::{DocId, Document, Fields};
    pub use crate::document::field_value::FieldValue;
    pub use crate::engine::SearchEngine;
    pub use crate::error::{ConversionError, OrdoError, Result};
    pub use crate::schema::{FieldMapping, FieldType, Mappings};
    pub use crate::search::query::{Query, TextClause};
    pub use crate::search::results::{SearchHit, SearchResults};
    pub use crate::sort::{SortOrder, SortRule, SortSpec};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
