//! Stages that rewrite or drop tokens after tokenization.
//!
//! - [`lowercase::LowercaseFilter`] - Folds case so "Dress" and "dress" are one term
//! - [`stop::StopFilter`] - Drops stop words
//!
//! ```
//! use ordo::analysis::token::Token;
//! use ordo::analysis::token_filter::Filter;
//! use ordo::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let tokens = vec![Token::new("Blue", 0), Token::new("DRESS", 1)];
//! let terms: Vec<String> = LowercaseFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["blue", "dress"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// One stage of an analysis pipeline.
pub trait Filter: Send + Sync {
    /// Wrap `tokens` with this stage.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Short stage name, shown in debug output.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;
