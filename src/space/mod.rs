//! Metric spaces: where clustering algorithms get their distances from.
//!
//! A [`MetricSpace`] answers one question, "how far apart are these two points?", and lets callers
//! register that answer up front with [`MetricSpace::add_connection`]. Clustering code never sees
//! how distances are stored.
//!
//! ## Conventions
//!
//! - A distance is a non-negative `f32`.
//! - `NaN` means the two points have no relation at all (no edge). Every threshold comparison in
//!   this crate is written as `distance <= range`, which is false for `NaN`, so unrelated points
//!   never become neighbors.
//! - Connections are undirected: after `add_connection(a, b, d)` both `distance(a, b)` and
//!   `distance(b, a)` return `d`.
//!
//! ## Implementations
//!
//! | Space | Points | Storage |
//! |-------|--------|---------|
//! | [`GraphSpace`] | any `Eq + Hash + Clone` | adjacency map per node |
//! | [`SparseMatrixSpace`] | [`MatrixCell`] | weighted `(row, column)` table |
//! | [`MatrixSpace`] | [`MatrixCell`] | dense boolean matrix (connected = `0.0`) |

mod graph;
mod matrix;
mod sparse;

pub use graph::GraphSpace;
pub use matrix::{MatrixCell, MatrixSpace};
pub use sparse::SparseMatrixSpace;

use crate::error::{Error, Result};

/// A space that can report the distance between two of its points.
pub trait MetricSpace<T> {
    /// Distance between `a` and `b`, or `NaN` when they are not related.
    ///
    /// Clustering algorithms only ask for pairs of distinct points.
    fn distance(&self, a: &T, b: &T) -> f32;

    /// Register a connection between `a` and `b`.
    ///
    /// Implementations store the connection in both directions.
    fn add_connection(&mut self, a: &T, b: &T, distance: f32) -> Result<()>;
}

/// Reject connection weights that cannot be compared against a range.
pub(crate) fn check_weight(distance: f32) -> Result<()> {
    if distance.is_nan() || distance < 0.0 {
        return Err(Error::InvalidParameter {
            name: "distance",
            message: "must be a non-negative number",
        });
    }
    Ok(())
}
