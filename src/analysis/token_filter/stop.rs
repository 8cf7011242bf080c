//! Stop filter implementation.
//!
//! Removes common words that carry no meaning for AND-matching. The same
//! filter runs at index time and at query time, so a stop word in a query
//! never restricts the result set.
//!
//! # Examples
//!
//! ```
//! use ordo::analysis::token_filter::Filter;
//! use ordo::analysis::token_filter::stop::StopFilter;
//! use ordo::analysis::token::Token;
//!
//! let tokens = ["art", "of", "the", "deal"]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(position, word)| Token::new(word, position));
//!
//! let kept: Vec<_> = StopFilter::new()
//!     .filter(Box::new(tokens))
//!     .unwrap()
//!     .map(|token| (token.position, token.text))
//!     .collect();
//!
//! assert_eq!(kept, vec![(0, "art".to_string()), (3, "deal".to_string())]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// A filter that removes stop words from the token stream.
///
/// Matching is exact, so the filter must run after [`LowercaseFilter`] for
/// "The" to be treated like "the".
///
/// [`LowercaseFilter`]: crate::analysis::token_filter::lowercase::LowercaseFilter
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use ordo::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// assert!(!filter.is_stop_word("the"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(|s| s.into()).collect()),
        }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_custom_list_replaces_default() {
        let filter = StopFilter::from_words(["dress", "hat"]);
        let words = ["the", "dress", "red", "hat"];
        let tokens = words.into_iter().enumerate().map(|(i, w)| Token::new(w, i));

        let kept: Vec<String> = filter
            .filter(Box::new(tokens))
            .unwrap()
            .map(|token| token.text)
            .collect();

        assert_eq!(kept, vec!["the", "red"]);
    }

    #[test]
    fn test_stop_words_are_dropped_and_positions_kept() {
        let words = ["the", "the", "war", "of", "worlds"];
        let tokens = words.into_iter().enumerate().map(|(i, w)| Token::new(w, i));
        let kept: Vec<(String, usize)> = StopFilter::new()
            .filter(Box::new(tokens))
            .unwrap()
            .map(|token| (token.text, token.position))
            .collect();

        assert_eq!(
            kept,
            vec![("war".to_string(), 2), ("worlds".to_string(), 4)]
        );
    }

    #[test]
    fn test_default_list() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), 33);
        for word in ["a", "the", "with", "into", "such"] {
            assert!(filter.is_stop_word(word), "{word} should be a stop word");
        }
        assert!(!filter.is_stop_word("The"));
        assert!(!filter.is_stop_word("cat"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
