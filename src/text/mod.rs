//! Text processing: tokenization, stop words, TF-IDF vectorization, and
//! cluster term characterization.
//!
//! The processing chain is strictly one-directional:
//! raw text → token sequence → TF-IDF embedding → cluster assignment.

pub mod stopwords;
pub mod tokenize;
pub mod topic;
pub mod vectorize;

pub use stopwords::StopWordsFilter;
pub use tokenize::AlphaTokenizer;
pub use topic::{top_terms, TermWeight};
pub use vectorize::TfIdfVectorizer;

use crate::error::Result;

/// Common trait for tokenizers.
///
/// # Examples
///
/// ```
/// use agrupar::text::{AlphaTokenizer, StopWordsFilter, Tokenizer};
///
/// let tokenizer = AlphaTokenizer::new(StopWordsFilter::new(Vec::<&str>::new()));
/// let tokens = tokenizer.tokenize("Hello, world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub trait Tokenizer {
    /// Tokenize text into a sequence of tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
