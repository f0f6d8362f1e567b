//! Euclidean distance matrix.
//!
//! Provides the dense pairwise distance table solvers read from, with the
//! school stored at the last index.

mod matrix;

pub use matrix::DistanceMatrix;
