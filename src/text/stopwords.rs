//! Stop words filtering for text preprocessing.
//!
//! Stop words are common words ("the", "is", "at") that carry little topical
//! signal; removing them keeps the vocabulary focused on discriminative terms.
//! Matching is case-insensitive via a `HashSet` lookup.

use std::collections::HashSet;

/// Stop words filter that removes common words from token lists.
///
/// # Examples
///
/// ```
/// use agrupar::text::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// let tokens = vec!["the", "vaccine", "is", "safe"];
/// assert_eq!(filter.filter(&tokens), vec!["vaccine", "safe"]);
///
/// let custom = StopWordsFilter::new(vec!["npr", "news"]);
/// assert!(custom.is_stop_word("NPR"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stop words stored in lowercase for case-insensitive matching
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter with custom stop words. Words are lowercased on the
    /// way in so matching is case-insensitive on both sides.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with a default list of common English stop words.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Filter stop words from a list of tokens, preserving order.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref().to_string())
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// True if the filter holds no stop words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopWordsFilter {
    fn default() -> Self {
        Self::english()
    }
}

/// Common English stop words.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "below", "between", "both", "but", "by", "can", "did",
    "do", "does", "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into",
    "is", "it", "its", "just", "may", "me", "more", "most", "my", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "said",
    "same", "says", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "you", "your", "yours",
];
