//! Clustering algorithms.
//!
//! K-Means over document embeddings, with centroid initialization drawn from
//! the training vectors themselves.

use crate::error::{AgruparError, Result};
use crate::metrics::inertia;
use crate::primitives::{Matrix, Vector};
use crate::traits::UnsupervisedEstimator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// K-Means clustering with a fixed iteration budget.
///
/// # Algorithm
///
/// 1. Initialize each of the k centroids by sampling a training vector
///    uniformly at random, **with replacement** — duplicate picks are
///    allowed, so the effective cluster count can degrade when the draw
///    repeats. Sampling from the data guarantees every centroid starts
///    inside the region the training vectors inhabit.
/// 2. Run exactly `iterations` Lloyd rounds (no convergence early-exit):
///    assign every vector to its nearest centroid by squared Euclidean
///    distance, then recompute each centroid as the coordinate-wise mean of
///    its assigned vectors.
///
/// Nearest-centroid comparison uses a non-strict `<=` against the running
/// minimum, so when several centroids tie, the **last** one wins. Keep that
/// tie-break: reproducibility tests depend on it.
///
/// A centroid that receives no vectors in an assignment round keeps its
/// previous coordinates for that round — the mean of an empty set is
/// undefined, and this policy is deterministic and never produces NaN.
///
/// # Examples
///
/// ```
/// use agrupar::prelude::*;
///
/// let data = Matrix::from_vec(4, 2, vec![
///     0.0, 0.0,
///     0.0, 0.0,
///     10.0, 10.0,
///     10.0, 10.0,
/// ]).unwrap();
///
/// let mut kmeans = KMeans::new(2).with_iterations(5).with_random_state(42);
/// kmeans.fit(&data).unwrap();
///
/// let labels = kmeans.predict(&data);
/// assert_eq!(labels.len(), 4);
/// ```
///
/// # Performance
///
/// - Time complexity: O(nkdi) where n=samples, k=clusters, d=dimension,
///   i=iterations
/// - Space complexity: O(kd)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeans {
    /// Number of clusters.
    k: usize,
    /// Fixed number of training iterations.
    iterations: usize,
    /// Random seed for centroid initialization.
    random_state: Option<u64>,
    /// Cluster centroids after fitting (k × dimension).
    centroids: Option<Matrix<f64>>,
    /// Labels for training data.
    labels: Option<Vec<usize>>,
    /// Within-cluster sum of squares after fitting.
    inertia: f64,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl KMeans {
    /// Creates a new K-Means with the specified number of clusters.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            iterations: 100,
            random_state: None,
            centroids: None,
            labels: None,
            inertia: 0.0,
        }
    }

    /// Sets the fixed number of training iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the random seed for reproducible centroid initialization.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Returns the number of clusters.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the configured iteration count.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the cluster centroids.
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    #[must_use]
    pub fn centroids(&self) -> &Matrix<f64> {
        self.centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the within-cluster sum of squares after fitting.
    #[must_use]
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.centroids.is_some()
    }

    /// Returns the index of the nearest centroid to `vector`.
    ///
    /// Uses squared Euclidean distance with the non-strict `<=` tie-break
    /// (the last centroid tying the minimum wins). Works on vectors never
    /// seen during fitting.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted or the vector dimension differs
    /// from the fitted centroids.
    #[must_use]
    pub fn infer(&self, vector: &Vector<f64>) -> usize {
        let centroids = self.centroids();
        Self::nearest(vector, centroids)
    }

    fn nearest(vector: &Vector<f64>, centroids: &Matrix<f64>) -> usize {
        let mut min_distance = f64::INFINITY;
        let mut min_index = 0;

        for c in 0..centroids.n_rows() {
            let distance = vector.squared_distance(&centroids.row(c));
            if distance <= min_distance {
                min_distance = distance;
                min_index = c;
            }
        }

        min_index
    }

    /// Draws k initial centroids uniformly at random, with replacement,
    /// from the rows of `x`.
    fn init_centroids(&self, x: &Matrix<f64>, rng: &mut StdRng) -> Matrix<f64> {
        let (n_samples, n_features) = x.shape();
        let mut data = Vec::with_capacity(self.k * n_features);

        for _ in 0..self.k {
            let pick = rng.gen_range(0..n_samples);
            data.extend_from_slice(x.row(pick).as_slice());
        }

        Matrix::from_vec(self.k, n_features, data)
            .expect("Internal error: centroid matrix creation failed")
    }

    /// Assigns each sample to the nearest centroid.
    fn assign_labels(x: &Matrix<f64>, centroids: &Matrix<f64>) -> Vec<usize> {
        (0..x.n_rows())
            .map(|i| Self::nearest(&x.row(i), centroids))
            .collect()
    }

    /// Recomputes each centroid as the mean of its assigned samples. A
    /// centroid with no assigned samples keeps its previous coordinates.
    fn update_centroids(&self, x: &Matrix<f64>, labels: &[usize], old: &Matrix<f64>) -> Matrix<f64> {
        let (_, n_features) = x.shape();
        let mut sums = vec![0.0; self.k * n_features];
        let mut counts = vec![0usize; self.k];

        for (i, &label) in labels.iter().enumerate() {
            counts[label] += 1;
            for j in 0..n_features {
                sums[label * n_features + j] += x.get(i, j);
            }
        }

        for c in 0..self.k {
            if counts[c] > 0 {
                for j in 0..n_features {
                    sums[c * n_features + j] /= counts[c] as f64;
                }
            } else {
                for j in 0..n_features {
                    sums[c * n_features + j] = old.get(c, j);
                }
            }
        }

        Matrix::from_vec(self.k, n_features, sums)
            .expect("Internal error: centroid update failed")
    }
}

impl UnsupervisedEstimator for KMeans {
    type Labels = Vec<usize>;

    /// Fits the K-Means model to the embedding set.
    ///
    /// Runs exactly the configured iteration count. Fewer samples than
    /// clusters is allowed: initialization samples with replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` has zero rows or `k` is zero.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()> {
        let n_samples = x.n_rows();

        if n_samples == 0 {
            return Err(AgruparError::empty_input("training vectors"));
        }
        if self.k == 0 {
            return Err(AgruparError::InvalidHyperparameter {
                param: "k".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }

        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut centroids = self.init_centroids(x, &mut rng);
        let mut labels = vec![0; n_samples];

        for _ in 0..self.iterations {
            labels = Self::assign_labels(x, &centroids);
            centroids = self.update_centroids(x, &labels, &centroids);
        }

        self.inertia = inertia(x, &centroids, &labels);
        self.labels = Some(labels);
        self.centroids = Some(centroids);

        Ok(())
    }

    /// Predicts cluster labels for data, one per row.
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    fn predict(&self, x: &Matrix<f64>) -> Vec<usize> {
        let centroids = self
            .centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.");

        Self::assign_labels(x, centroids)
    }
}
