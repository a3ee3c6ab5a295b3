//! Alpha-only tokenization for raw article text.

use super::{StopWordsFilter, Tokenizer};
use crate::error::Result;

/// Tokenizer that extracts lowercase, alpha-only unigrams from raw text.
///
/// Every character that is not an ASCII letter or a space is deleted (not
/// replaced by whitespace), so a digit embedded in a word splices the
/// remaining letters together. The result is lowercased, split on whitespace
/// runs, and filtered through a [`StopWordsFilter`]. Repeated tokens are kept
/// so downstream term-frequency counting works, and the original word order
/// is preserved.
///
/// Malformed or empty input never fails; it produces an empty token list.
///
/// # Examples
///
/// ```
/// use agrupar::text::{AlphaTokenizer, StopWordsFilter};
///
/// let tokenizer = AlphaTokenizer::new(StopWordsFilter::new(vec!["the", "is"]));
/// let tokens = tokenizer.clean("The Vaccine is Safe 123");
/// assert_eq!(tokens, vec!["vaccine", "safe"]);
/// ```
#[derive(Debug, Clone)]
pub struct AlphaTokenizer {
    stop_words: StopWordsFilter,
}

impl AlphaTokenizer {
    /// Create a tokenizer with the given stop words filter.
    #[must_use]
    pub fn new(stop_words: StopWordsFilter) -> Self {
        Self { stop_words }
    }

    /// Clean raw text into a sequence of lowercase alpha-only tokens.
    #[must_use]
    pub fn clean(&self, text: &str) -> Vec<String> {
        let scrubbed: String = text
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
            .collect::<String>()
            .to_lowercase();

        scrubbed
            .split_whitespace()
            .filter(|word| !self.stop_words.is_stop_word(word))
            .map(ToString::to_string)
            .collect()
    }
}

impl Tokenizer for AlphaTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.clean(text))
    }
}

impl Default for AlphaTokenizer {
    fn default() -> Self {
        Self::new(StopWordsFilter::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> AlphaTokenizer {
        AlphaTokenizer::new(StopWordsFilter::new(Vec::<&str>::new()))
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = bare().clean("Hello, World!");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_digits_deleted_not_replaced() {
        // The digit is removed in place, splicing the fragments together.
        let tokens = bare().clean("covid19 cases");
        assert_eq!(tokens, vec!["covid", "cases"]);
    }

    #[test]
    fn test_pure_digit_word_vanishes() {
        let tokens = bare().clean("top 10 stocks");
        assert_eq!(tokens, vec!["top", "stocks"]);
    }

    #[test]
    fn test_stopword_scenario() {
        let tokenizer = AlphaTokenizer::new(StopWordsFilter::new(vec!["the", "is"]));
        let tokens = tokenizer.clean("The Vaccine is Safe 123");
        assert_eq!(tokens, vec!["vaccine", "safe"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(bare().clean("").is_empty());
    }

    #[test]
    fn test_all_punctuation_input() {
        assert!(bare().clean("!!! ... 123 @#$").is_empty());
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let tokens = bare().clean("  a   b\t\tc  ");
        // Tabs are deleted rather than kept as separators, so b and c splice.
        assert_eq!(tokens, vec!["a", "bc"]);
    }

    #[test]
    fn test_repeated_tokens_kept_in_order() {
        let tokens = bare().clean("spam ham spam spam");
        assert_eq!(tokens, vec!["spam", "ham", "spam", "spam"]);
    }

    #[test]
    fn test_stopword_matched_after_case_fold() {
        let tokenizer = AlphaTokenizer::new(StopWordsFilter::new(vec!["NPR"]));
        assert!(tokenizer.clean("npr NPR Npr").is_empty());
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let tokenizer = AlphaTokenizer::new(StopWordsFilter::new(vec!["the"]));
        let once = tokenizer.clean("The quick, brown fox 99 jumps!");
        let twice = tokenizer.clean(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tokenizer_trait_never_fails() {
        let tokens = bare().tokenize("ok then").expect("tokenize should succeed");
        assert_eq!(tokens, vec!["ok", "then"]);
    }
}
