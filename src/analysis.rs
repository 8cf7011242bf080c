//! Text analysis module for Ordo.
//!
//! Analysis turns a field value or a query string into index terms. The same
//! analyzer is used on both sides so that a query term matches exactly the
//! terms produced at index time.
//!
//! ```text
//! Raw Text → WhitespaceTokenizer → LowercaseFilter → StopFilter → Terms
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
