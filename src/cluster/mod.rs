//! Clustering algorithms over metric spaces.
//!
//! Every algorithm here is written against [`MetricSpace`](crate::space::MetricSpace) only: it
//! asks for the distance between two points and compares it with a threshold. Nothing assumes
//! coordinates, so points can be graph nodes, matrix cells, or any caller type the space knows.
//!
//! ## Algorithms
//!
//! ### Connected components
//!
//! Points closer than `range` are linked; each connected piece is a cluster. Every point lands
//! in exactly one cluster.
//!
//! ### DBSCAN
//!
//! Density-based clustering. A point with at least `min_points` others within `range` is a core
//! point; clusters grow from core points and absorb the non-core points they touch. Everything
//! else is noise.
//!
//! ### OPTICS
//!
//! Builds a reachability ordering of all points, then cuts clusters where the reachability drops
//! by more than `range`. Useful when densities vary across the data.
//!
//! ## Results
//!
//! Algorithms return clusters as lists, in discovery order. Points that belong to no cluster are
//! simply absent; [`Clustering::fit_predict`] and [`Clustering::fit_predict_with_noise`] give a
//! per-point view instead.
//!
//! ## Usage
//!
//! ```rust
//! use cluster_analysis::cluster::{Clustering, ConnectedComponents, Dbscan, Optics};
//! use cluster_analysis::space::{GraphSpace, MetricSpace};
//!
//! let points = ["a", "b", "c", "d"];
//! let mut space = GraphSpace::new();
//! space.add_connection(&"a", &"b", 6.0).unwrap();
//! space.add_connection(&"a", &"c", 4.0).unwrap();
//! space.add_connection(&"a", &"d", 4.0).unwrap();
//!
//! // Everything connected ends up together.
//! let clusters = ConnectedComponents::new().cluster(&points, &space).unwrap();
//! assert_eq!(clusters.len(), 1);
//!
//! // DBSCAN leaves b out: it is too far from a at range 5.
//! let labels = Dbscan::new(5.0, 2).fit_predict_with_noise(&points, &space).unwrap();
//! assert_eq!(labels, vec![Some(0), None, Some(0), Some(0)]);
//!
//! // OPTICS keeps the reachability ordering around.
//! let plot = Optics::new(3, 7.0).reachability_plot(&points, &space).unwrap();
//! assert_eq!(plot.order().len(), points.len());
//! ```

mod connected_components;
mod dbscan;
mod optics;
mod traits;
mod util;

pub use connected_components::ConnectedComponents;
pub use dbscan::Dbscan;
pub use optics::{Optics, ReachabilityPlot};
pub use traits::{Clustering, NOISE};

use crate::error::Result;
use crate::space::MetricSpace;

/// Cluster `points` into connected components of the "within `range`" relation.
///
/// Pass `f32::INFINITY` to link every related pair.
pub fn connected_components<T, S>(points: &[T], space: &S, range: f32) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    S: MetricSpace<T> + ?Sized,
{
    ConnectedComponents::new()
        .with_range(range)
        .cluster(points, space)
}

/// Cluster `points` with DBSCAN.
pub fn dbscan<T, S>(points: &[T], space: &S, range: f32, min_points: usize) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    S: MetricSpace<T> + ?Sized,
{
    Dbscan::new(range, min_points).cluster(points, space)
}

/// Cluster `points` with OPTICS.
pub fn optics<T, S>(points: &[T], space: &S, min_points: usize, range: f32) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    S: MetricSpace<T> + ?Sized,
{
    Optics::new(min_points, range).cluster(points, space)
}
