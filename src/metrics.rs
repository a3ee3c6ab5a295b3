//! Evaluation metrics for clustering.

use crate::primitives::Matrix;

/// Within-cluster sum of squares (inertia).
///
/// Sums the squared Euclidean distance from each sample to its assigned
/// centroid. Lower is tighter.
///
/// # Examples
///
/// ```
/// use agrupar::metrics::inertia;
/// use agrupar::primitives::Matrix;
///
/// let x = Matrix::from_vec(2, 1, vec![0.0, 2.0]).unwrap();
/// let centroids = Matrix::from_vec(1, 1, vec![1.0]).unwrap();
/// let labels = vec![0, 0];
/// assert!((inertia(&x, &centroids, &labels) - 2.0).abs() < 1e-12);
/// ```
///
/// # Panics
///
/// Panics if a label indexes past the centroid rows or if `labels` is shorter
/// than the sample count.
#[must_use]
pub fn inertia(x: &Matrix<f64>, centroids: &Matrix<f64>, labels: &[usize]) -> f64 {
    let (n_samples, _) = x.shape();
    let mut total = 0.0;
    for i in 0..n_samples {
        let point = x.row(i);
        let centroid = centroids.row(labels[i]);
        total += point.squared_distance(&centroid);
    }
    total
}
