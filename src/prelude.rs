//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use agrupar::prelude::*;
//! ```

pub use crate::cluster::KMeans;
pub use crate::metrics::inertia;
pub use crate::pipeline::{strip_tags, TopicDiscovery, TopicReport};
pub use crate::primitives::{Matrix, Vector};
pub use crate::text::{
    top_terms, AlphaTokenizer, StopWordsFilter, TermWeight, TfIdfVectorizer, Tokenizer,
};
pub use crate::traits::UnsupervisedEstimator;
