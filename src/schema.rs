//! Field mappings.
//!
//! A mapping declares the type of a field and whether it is meant for
//! sorting. Only fields declared [`FieldType::Text`] are tokenized into the
//! inverted index; fields with no mapping are stored but never indexed.

pub mod mapping;

pub use mapping::{FieldMapping, FieldType, Mappings};
