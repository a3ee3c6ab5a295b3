//! End-to-end driver: fetch → clean → embed → cluster → characterize.
//!
//! The numeric core lives in [`crate::text`] and [`crate::cluster`]; this
//! module is the thin orchestration around it. Fetching is all-or-nothing:
//! the first failed URL aborts the whole run rather than clustering a
//! partial corpus.

use crate::cluster::KMeans;
use crate::error::{AgruparError, Result};
use crate::text::{top_terms, AlphaTokenizer, StopWordsFilter, TermWeight, TfIdfVectorizer};
use crate::traits::UnsupervisedEstimator;

/// Fetch the raw body of a URL.
///
/// # Errors
///
/// Returns [`AgruparError::Fetch`] on any transport or HTTP-status failure,
/// or when the response body is empty. Failures are not retried.
pub fn fetch(url: &str) -> Result<String> {
    let body = ureq::get(url)
        .call()
        .map_err(|e| AgruparError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?
        .into_string()
        .map_err(|e| AgruparError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if body.is_empty() {
        return Err(AgruparError::Fetch {
            url: url.to_string(),
            message: "response body was empty".to_string(),
        });
    }

    Ok(body)
}

/// Remove angle-bracket-delimited spans from raw HTML.
///
/// A single-pass scanner equivalent to deleting every `<...>` span. Content
/// between tags is preserved verbatim; an unterminated `<` swallows the rest
/// of the input.
///
/// # Examples
///
/// ```
/// use agrupar::pipeline::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
/// ```
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Top-weighted terms of each cluster centroid plus the corpus assignments.
#[derive(Debug, Clone)]
pub struct TopicReport {
    /// Cluster index per input document, in corpus order.
    pub assignments: Vec<usize>,
    /// Per-cluster top terms, index-aligned with centroid indices.
    pub clusters: Vec<Vec<TermWeight>>,
}

/// Configurable fetch → clean → embed → cluster → report driver.
///
/// # Examples
///
/// ```
/// use agrupar::pipeline::TopicDiscovery;
/// use agrupar::text::StopWordsFilter;
///
/// let corpus = vec![
///     "the covid vaccination effort is underway covid vaccines work".to_string(),
///     "vaccines are safe and vaccination is recommended for covid".to_string(),
///     "the gamestop stock frenzy has wallstreet on edge stock volatility".to_string(),
///     "gamestop stock volatility traces back to reddit stock traders".to_string(),
/// ];
///
/// let discovery = TopicDiscovery::new(2)
///     .with_stop_words(StopWordsFilter::english())
///     .with_iterations(25)
///     .with_random_state(42);
///
/// let report = discovery.discover(&corpus).unwrap();
/// assert_eq!(report.assignments.len(), 4);
/// assert_eq!(report.clusters.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TopicDiscovery {
    stop_words: StopWordsFilter,
    min_occurrence: usize,
    k: usize,
    iterations: usize,
    top_n: usize,
    random_state: Option<u64>,
}

impl TopicDiscovery {
    /// Create a driver that discovers `k` topics.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            stop_words: StopWordsFilter::english(),
            min_occurrence: 0,
            k,
            iterations: 100,
            top_n: 6,
            random_state: None,
        }
    }

    /// Replace the stop words filter used during tokenization.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWordsFilter) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Per-document occurrence floor for vocabulary construction.
    #[must_use]
    pub fn with_min_occurrence(mut self, min_occurrence: usize) -> Self {
        self.min_occurrence = min_occurrence;
        self
    }

    /// Number of K-Means training iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// How many top terms to report per cluster.
    #[must_use]
    pub fn with_top_terms(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Seed for reproducible clustering.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Run discovery on already-fetched plain-text documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus is empty, if every term was pruned
    /// (zero-dimensional embeddings cannot be clustered), or if clustering
    /// fails.
    pub fn discover(&self, documents: &[String]) -> Result<TopicReport> {
        if documents.is_empty() {
            return Err(AgruparError::empty_input("document corpus"));
        }

        let tokenizer = AlphaTokenizer::new(self.stop_words.clone());
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenizer.clean(d)).collect();

        let mut vectorizer = TfIdfVectorizer::new().with_min_occurrence(self.min_occurrence);
        vectorizer.fit(&tokenized);
        if !vectorizer.is_fitted() {
            return Err(AgruparError::empty_input(
                "vocabulary (every term was pruned)",
            ));
        }
        let embeddings = vectorizer.transform(&tokenized)?;

        let mut kmeans = KMeans::new(self.k).with_iterations(self.iterations);
        if let Some(seed) = self.random_state {
            kmeans = kmeans.with_random_state(seed);
        }
        kmeans.fit(&embeddings)?;

        let assignments = kmeans.predict(&embeddings);
        let centroids = kmeans.centroids();
        let clusters = (0..self.k)
            .map(|c| top_terms(&centroids.row(c), vectorizer.vocabulary(), self.top_n))
            .collect::<Result<Vec<_>>>()?;

        Ok(TopicReport {
            assignments,
            clusters,
        })
    }

    /// Fetch each URL, strip markup, and run discovery on the results.
    ///
    /// # Errors
    ///
    /// The first URL that fails to fetch aborts the whole run; no partial
    /// corpus is processed. Also fails for the same reasons as
    /// [`TopicDiscovery::discover`].
    pub fn run(&self, urls: &[&str]) -> Result<TopicReport> {
        let mut documents = Vec::with_capacity(urls.len());
        for url in urls {
            documents.push(strip_tags(&fetch(url)?));
        }
        self.discover(&documents)
    }
}
