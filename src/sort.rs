//! Sort specifications and the document comparator.
//!
//! A [`SortSpec`] is an ordered list of `(field, order)` rules. Every distinct
//! spec gets its own inverted index, built with documents visited in spec
//! order, so results come back sorted without sorting at query time.

pub mod comparator;
pub mod spec;

pub use comparator::{SortComparator, SortKey, SortValue};
pub use spec::{SortOrder, SortRule, SortSpec};
