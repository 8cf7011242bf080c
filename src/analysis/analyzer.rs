//! Analyzers combine a tokenizer with a chain of token filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`standard::StandardAnalyzer`] - Whitespace, lowercase and English stop words
//!
//! # Examples
//!
//! ```
//! use ordo::analysis::analyzer::Analyzer;
//! use ordo::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let terms = analyzer.terms("The Cat sat").unwrap();
//!
//! assert_eq!(terms, vec!["cat", "sat"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync + std::fmt::Debug {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep the text of every non-empty token.
    ///
    /// This is the term sequence the indexer and the searcher work with.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .filter(|token| !token.is_empty())
            .map(|token| token.text)
            .collect())
    }
}

pub mod pipeline;
pub mod standard;
