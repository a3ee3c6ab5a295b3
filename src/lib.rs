//! Agrupar: unsupervised topic discovery over text corpora in pure Rust.
//!
//! Agrupar takes a small corpus of documents (typically web articles), cleans
//! and tokenizes the raw text, embeds each document as a TF-IDF vector, and
//! clusters the embeddings with K-Means. Each cluster is characterized by the
//! top-weighted vocabulary terms of its centroid.
//!
//! # Quick Start
//!
//! ```
//! use agrupar::prelude::*;
//!
//! let stopwords = StopWordsFilter::new(vec!["the", "is", "and", "a", "by"]);
//! let tokenizer = AlphaTokenizer::new(stopwords);
//!
//! let corpus = [
//!     "The vaccine rollout is underway and vaccine supply is growing.",
//!     "The stock rally is driven by retail stock traders.",
//! ];
//! let documents: Vec<Vec<String>> = corpus.iter().map(|t| tokenizer.clean(t)).collect();
//!
//! let mut vectorizer = TfIdfVectorizer::new();
//! vectorizer.fit(&documents);
//! let embeddings = vectorizer.transform(&documents).unwrap();
//!
//! let mut kmeans = KMeans::new(2).with_iterations(10).with_random_state(42);
//! kmeans.fit(&embeddings).unwrap();
//! let labels = kmeans.predict(&embeddings);
//! assert_eq!(labels.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`text`]: Tokenization, stop words, TF-IDF vectorization, cluster terms
//! - [`cluster`]: K-Means clustering
//! - [`metrics`]: Evaluation metrics (inertia)
//! - [`pipeline`]: Fetch → clean → embed → cluster driver

pub mod cluster;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod text;
pub mod traits;

pub use error::{AgruparError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::UnsupervisedEstimator;
