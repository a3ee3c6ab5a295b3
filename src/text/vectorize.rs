//! TF-IDF vectorization of tokenized documents.

use crate::error::{AgruparError, Result};
use crate::primitives::{Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// TF-IDF embedder over a fixed vocabulary learned from a training corpus.
///
/// Fitting establishes a vocabulary and a document-frequency table from
/// tokenized documents; both are immutable afterward and define the
/// dimensionality and axis order of every embedding this instance produces.
///
/// The embedding weight for a vocabulary term is its raw term frequency in
/// the input divided by the term's document frequency — a plain TF/DF ratio,
/// deliberately not the classical `tf × log(N/df)` and deliberately not
/// length-normalized: raw counts keep a topical keyword concentrated in part
/// of a long document from being diluted by the rest of it.
///
/// # Examples
///
/// ```
/// use agrupar::text::TfIdfVectorizer;
///
/// let docs: Vec<Vec<String>> = vec![
///     vec!["a", "b", "b"], vec!["a", "c", "c"], vec!["b", "b", "c"],
/// ].into_iter().map(|d| d.into_iter().map(String::from).collect()).collect();
///
/// let mut vectorizer = TfIdfVectorizer::new();
/// vectorizer.fit(&docs);
/// assert_eq!(vectorizer.dimension(), 3);
///
/// let embedding = vectorizer.embed(&docs[0]);
/// // tf(a)=1 df(a)=2, tf(b)=2 df(b)=2, tf(c)=0
/// assert_eq!(embedding.as_slice(), &[0.5, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Fixed, ordered vocabulary (lexicographic) established at fit time.
    vocabulary: Vec<String>,
    /// Term → vocabulary position.
    vocab_index: HashMap<String, usize>,
    /// Document frequencies, positionally aligned with `vocabulary`.
    doc_freq: Vec<usize>,
    /// Per-document occurrence floor: a term must occur strictly more than
    /// this many times in a document to count toward document frequency.
    min_occurrence: usize,
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer with `min_occurrence = 0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-document occurrence floor applied before document
    /// frequencies are counted. A term whose in-document count is less than
    /// or equal to this value is ignored for that document.
    #[must_use]
    pub fn with_min_occurrence(mut self, min_occurrence: usize) -> Self {
        self.min_occurrence = min_occurrence;
        self
    }

    /// Learn the vocabulary and document-frequency table from a tokenized
    /// corpus.
    ///
    /// Terms that survive the per-document occurrence floor increment the
    /// corpus-wide document frequency by exactly one per document. Terms
    /// that then appear in every single document carry no discriminative
    /// power and are dropped. The survivors, sorted lexicographically, form
    /// the vocabulary.
    ///
    /// Fitting on zero documents, or on a corpus where every term is pruned,
    /// silently yields an empty vocabulary; `embed` then returns length-0
    /// vectors. Guarding against zero-dimensional clustering downstream is
    /// the caller's responsibility.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[Vec<S>]) {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for document in documents {
            let mut tf = term_frequencies(document);
            tf.retain(|_, &mut count| count > self.min_occurrence);
            for term in tf.into_keys() {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Terms present in literally every document discriminate nothing.
        doc_freq.retain(|_, &mut df| df != documents.len());

        let mut vocabulary: Vec<String> = doc_freq.keys().cloned().collect();
        vocabulary.sort_unstable();

        self.doc_freq = vocabulary
            .iter()
            .map(|term| doc_freq[term])
            .collect();
        self.vocab_index = vocabulary
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.vocabulary = vocabulary;
    }

    /// Embed a tokenized document into the fitted vector space.
    ///
    /// Term frequencies are recomputed fresh from the input — the
    /// `min_occurrence` floor applies only at fit time. Documents containing
    /// only out-of-vocabulary terms embed to the all-zero vector.
    #[must_use]
    pub fn embed<S: AsRef<str>>(&self, document: &[S]) -> Vector<f64> {
        let tf = term_frequencies(document);
        let weights: Vec<f64> = self
            .vocabulary
            .iter()
            .zip(self.doc_freq.iter())
            .map(|(term, &df)| match tf.get(term.as_str()) {
                Some(&count) => count as f64 / df as f64,
                None => 0.0,
            })
            .collect();
        Vector::from_vec(weights)
    }

    /// Embed a whole corpus, one row per document.
    ///
    /// # Errors
    ///
    /// Returns an error only if the stacked rows are inconsistent, which
    /// cannot happen for embeddings from one fitted vectorizer.
    pub fn transform<S: AsRef<str>>(&self, documents: &[Vec<S>]) -> Result<Matrix<f64>> {
        let rows: Vec<Vector<f64>> = documents.iter().map(|d| self.embed(d)).collect();
        Matrix::from_rows(&rows).map_err(AgruparError::from)
    }

    /// The fixed, ordered vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Embedding dimensionality (vocabulary size).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// Document frequency of a vocabulary term, or `None` if the term is
    /// out of vocabulary.
    #[must_use]
    pub fn document_frequency(&self, term: &str) -> Option<usize> {
        self.vocab_index.get(term).map(|&idx| self.doc_freq[idx])
    }

    /// The configured per-document occurrence floor.
    #[must_use]
    pub fn min_occurrence(&self) -> usize {
        self.min_occurrence
    }

    /// True once `fit` produced a non-empty vocabulary.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }
}

/// Raw term counts within a single document.
fn term_frequencies<S: AsRef<str>>(document: &[S]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in document {
        *counts.entry(word.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}
