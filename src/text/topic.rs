//! Cluster characterization: top-weighted vocabulary terms of a centroid.

use crate::error::{AgruparError, Result};
use crate::primitives::Vector;

/// A vocabulary term paired with its centroid weight.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    /// Vocabulary term
    pub term: String,
    /// Centroid coordinate for the term
    pub weight: f64,
}

/// Returns the `n` top-weighted terms of a centroid.
///
/// Pairs every vocabulary term with its centroid coordinate, sorts
/// descending by weight with an ascending tie-break on the term name, and
/// keeps the first `n`. The explicit sort keeps terms that share an
/// identical weight — a value-keyed ordered map would silently drop all but
/// one of them.
///
/// # Errors
///
/// Returns a dimension mismatch error if `weights` and `vocabulary` have
/// different lengths.
///
/// # Examples
///
/// ```
/// use agrupar::primitives::Vector;
/// use agrupar::text::top_terms;
///
/// let vocabulary = vec!["gaza".to_string(), "stock".to_string(), "vaccine".to_string()];
/// let weights = Vector::from_slice(&[0.1, 0.9, 0.4]);
///
/// let top = top_terms(&weights, &vocabulary, 2).unwrap();
/// assert_eq!(top[0].term, "stock");
/// assert_eq!(top[1].term, "vaccine");
/// ```
pub fn top_terms(weights: &Vector<f64>, vocabulary: &[String], n: usize) -> Result<Vec<TermWeight>> {
    if weights.len() != vocabulary.len() {
        return Err(AgruparError::dimension_mismatch(
            vocabulary.len(),
            weights.len(),
        ));
    }

    let mut ranked: Vec<TermWeight> = vocabulary
        .iter()
        .zip(weights.iter())
        .map(|(term, &weight)| TermWeight {
            term: term.clone(),
            weight,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    ranked.truncate(n);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vec<String> {
        terms.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_orders_by_descending_weight() {
        let vocabulary = vocab(&["low", "high", "mid"]);
        let weights = Vector::from_slice(&[0.1, 0.9, 0.5]);

        let top = top_terms(&weights, &vocabulary, 3).expect("matching lengths");
        let names: Vec<&str> = top.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let vocabulary = vocab(&["a", "b", "c", "d"]);
        let weights = Vector::from_slice(&[0.4, 0.3, 0.2, 0.1]);

        let top = top_terms(&weights, &vocabulary, 2).expect("matching lengths");
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].term, "a");
    }

    #[test]
    fn test_equal_weights_all_kept_with_stable_tie_break() {
        // Duplicate weights must not collapse; ties order by term name.
        let vocabulary = vocab(&["zeta", "alpha", "mid"]);
        let weights = Vector::from_slice(&[0.5, 0.5, 0.5]);

        let top = top_terms(&weights, &vocabulary, 3).expect("matching lengths");
        let names: Vec<&str> = top.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_n_larger_than_vocabulary() {
        let vocabulary = vocab(&["only"]);
        let weights = Vector::from_slice(&[1.0]);

        let top = top_terms(&weights, &vocabulary, 10).expect("matching lengths");
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_dimension_mismatch_errors() {
        let vocabulary = vocab(&["a", "b"]);
        let weights = Vector::from_slice(&[1.0]);
        assert!(top_terms(&weights, &vocabulary, 1).is_err());
    }

    #[test]
    fn test_empty_inputs() {
        let top = top_terms(&Vector::from_vec(vec![]), &[], 5).expect("both empty");
        assert!(top.is_empty());
    }
}
