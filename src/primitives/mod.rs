//! Core compute primitives (Vector, Matrix).
//!
//! These types carry the embeddings and centroid sets used by the rest of
//! the crate.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
