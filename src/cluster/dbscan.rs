//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN is a density-based clustering algorithm that groups points based on
//! neighborhood density. Unlike connected components, it:
//!
//! - Requires a minimum local density before a cluster can grow
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Range**: Maximum distance between two points to be neighbors (seeds).
//! - **MinPoints**: Minimum number of *other* points within range for a point to be "core".
//! - **Core point**: Has at least MinPoints seeds.
//! - **Border point**: Within range of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unclassified point P (input order):
//!    - Find seeds within range
//!    - If |seeds| < MinPoints, mark as noise (may change later)
//!    - Else P is core: start new cluster, expand from seeds
//!
//! 2. Expansion: pop seeds off a stack (depth first):
//!    - Skip points already in a cluster
//!    - Add to cluster
//!    - If the point was noise, stop there: it already failed the core test
//!    - If core, push its seeds
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance queries.
//! - **Space**: O(n) for classification ids, plus the seed stack.
//!
//! ## Limitations
//!
//! - Struggles with varying densities (consider OPTICS)
//! - Range is sensitive and dataset-dependent
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use tracing::{debug, trace};

use super::traits::Clustering;
use super::util::{self, NOISE_ID, UNCLASSIFIED};
use crate::error::Result;
use crate::space::MetricSpace;

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dbscan {
    /// Maximum distance for a point to be a seed.
    range: f32,
    /// Minimum seeds for core point classification.
    min_points: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `range` - Maximum distance between two points to be neighbors.
    /// * `min_points` - Number of other points within `range` needed to make a core point.
    ///   `0` makes every point core, so isolated points come back as singleton clusters.
    pub fn new(range: f32, min_points: usize) -> Self {
        Self { range, min_points }
    }

    /// Set the neighborhood range.
    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// The configured neighborhood range.
    pub fn range(&self) -> f32 {
        self.range
    }

    /// The configured core point threshold.
    pub fn min_points(&self) -> usize {
        self.min_points
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 4)
    }
}

struct Context<'a, T, S: ?Sized> {
    points: &'a [T],
    space: &'a S,
    range: f32,
    min_points: usize,
    cluster_ids: Vec<i32>,
    current_cluster_id: i32,
}

impl<T, S> Context<'_, T, S>
where
    S: MetricSpace<T> + ?Sized,
{
    fn seeds(&self, index: usize) -> Vec<usize> {
        util::region_query(self.points, self.space, index, self.range)
            .into_iter()
            .map(|(idx, _)| idx)
            .collect()
    }

    fn try_create_cluster(&mut self, index: usize) -> Option<Vec<usize>> {
        let seeds = self.seeds(index);

        if seeds.len() < self.min_points {
            // Not enough seeds: mark as noise (might be border later)
            self.cluster_ids[index] = NOISE_ID;
            return None;
        }

        self.current_cluster_id += 1;
        let id = self.current_cluster_id;
        self.cluster_ids[index] = id;
        trace!("dbscan: opening cluster {} at core point {}", id, index);

        let mut cluster = vec![index];
        self.expand_cluster(&mut cluster, seeds, id);
        Some(cluster)
    }

    fn expand_cluster(&mut self, cluster: &mut Vec<usize>, mut seeds: Vec<usize>, id: i32) {
        // Seeds is used as a stack for depth first search.
        while let Some(s) = seeds.pop() {
            let old_id = self.cluster_ids[s];
            if old_id != UNCLASSIFIED && old_id != NOISE_ID {
                continue;
            }

            cluster.push(s);
            self.cluster_ids[s] = id;

            // Noise already failed the core check.
            if old_id == NOISE_ID {
                continue;
            }

            let child_seeds = self.seeds(s);
            if child_seeds.len() >= self.min_points {
                seeds.extend(child_seeds);
            }
        }
    }
}

impl Clustering for Dbscan {
    fn cluster_indices<T, S>(&self, points: &[T], space: &S) -> Result<Vec<Vec<usize>>>
    where
        S: MetricSpace<T> + ?Sized,
    {
        util::check_range(self.range)?;

        // Initialize: all points unclassified.
        let mut ctx = Context {
            points,
            space,
            range: self.range,
            min_points: self.min_points,
            cluster_ids: vec![UNCLASSIFIED; points.len()],
            current_cluster_id: 0,
        };

        let mut clusters = Vec::new();
        for index in 0..points.len() {
            if ctx.cluster_ids[index] != UNCLASSIFIED {
                continue;
            }
            if let Some(cluster) = ctx.try_create_cluster(index) {
                clusters.push(cluster);
            }
        }

        let noise = ctx.cluster_ids.iter().filter(|&&id| id == NOISE_ID).count();
        debug!(
            "dbscan: {} points, {} clusters, {} noise (range={}, min_points={})",
            points.len(),
            clusters.len(),
            noise,
            self.range,
            self.min_points
        );
        Ok(clusters)
    }
}
