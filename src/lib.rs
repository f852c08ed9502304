//! Clustering over metric spaces.
//!
//! `cluster-analysis` runs classical unsupervised clustering over any set of points for which a
//! pairwise distance can be looked up. The algorithms only see the [`MetricSpace`] trait, so the
//! same code clusters nodes of a weighted graph, cells of a dense adjacency matrix, or entries of
//! a sparse distance table.
//!
//! The primary public API is under [`cluster`], which provides:
//! - connected components (threshold connectivity, no noise)
//! - DBSCAN (density clustering with noise)
//! - OPTICS (reachability ordering plus drop-based cluster extraction)
//!
//! Concrete spaces live under [`space`].

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod space;

pub use cluster::{
    connected_components, dbscan, optics, Clustering, ConnectedComponents, Dbscan, Optics,
    ReachabilityPlot, NOISE,
};
pub use error::{Error, Result};
pub use space::{GraphSpace, MatrixCell, MatrixSpace, MetricSpace, SparseMatrixSpace};
