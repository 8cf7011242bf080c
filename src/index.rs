//! Sort-aware inverted indexes.
//!
//! - [`postings::PostingsList`] - Ordered document ids for one term
//! - [`inverted::InvertedIndex`] - Field → term → postings, built for one sort spec
//! - [`manager::IndexManager`] - Lazily builds and caches one index per sort spec
//!
//! The order of every postings list is fixed when the index is built, which is
//! what lets the searcher return sorted results without sorting.

pub mod inverted;
pub mod manager;
pub mod postings;
