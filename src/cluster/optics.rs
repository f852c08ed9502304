//! OPTICS: Ordering Points To Identify the Clustering Structure.
//!
//! OPTICS (Ankerst et al., 1999) does not assign clusters directly. It first walks the points in
//! an order where each next point is the one most easily *reached* from what has been walked so
//! far, recording a reachability distance for each. Dense regions show up as runs of low
//! reachability; clusters are then cut out of that ordering.
//!
//! # Ordering
//!
//! - **Neighbors**: every other point within `range`.
//! - **Core distance**: distance to the `min_points`-th nearest neighbor. Points with fewer
//!   than `min_points` neighbors have none and never propagate reachability.
//! - **Reachability** of a neighbor `q` from a core point `p`:
//!   `max(core_distance(p), distance(p, q))`. Every point starts at `+inf`; values only go down.
//!
//! Points are taken in input order. Each unprocessed point is appended to the ordering and, if it
//! is core, pushes its unprocessed neighbors into a min-priority queue keyed by reachability.
//! The queue is drained (lowest reachability first) before the next input point is considered.
//! Entries made stale by a later decrease are skipped when popped.
//!
//! # Extraction
//!
//! Walk the ordering with a buffer. At each position compare the point's reachability with the
//! next point's (`0` past the end). A drop larger than `range` closes the buffer, which becomes a
//! cluster if it holds more than one point. Independently, the point joins the buffer when its
//! reachability is below `range` or still `+inf` (it started a new walk). The drop test runs
//! first and looks at the next point whether or not that point will join.
//!
//! # References
//!
//! Ankerst, Breunig, Kriegel, Sander (1999). "OPTICS: Ordering Points To Identify the
//! Clustering Structure." SIGMOD-99.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::mem;

use tracing::{debug, trace};

use super::traits::Clustering;
use super::util;
use crate::error::Result;
use crate::space::MetricSpace;

/// OPTICS clustering algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Optics {
    /// Neighbors needed for a point to have a core distance.
    min_points: usize,
    /// Neighborhood radius, also the drop threshold during extraction.
    range: f32,
}

impl Optics {
    /// Create a new OPTICS clusterer.
    ///
    /// # Arguments
    ///
    /// * `min_points` - Number of other points within `range` needed to make a core point.
    /// * `range` - Neighborhood radius. Also the reachability drop that separates clusters.
    pub fn new(min_points: usize, range: f32) -> Self {
        Self { min_points, range }
    }

    /// Set minimum points for core classification.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Set the neighborhood range.
    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    /// The configured core point threshold.
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// The configured neighborhood range.
    pub fn range(&self) -> f32 {
        self.range
    }

    /// Compute the reachability ordering of `points` without extracting clusters.
    pub fn reachability_plot<T, S>(&self, points: &[T], space: &S) -> Result<ReachabilityPlot>
    where
        S: MetricSpace<T> + ?Sized,
    {
        util::check_min_points(self.min_points)?;
        util::check_range(self.range)?;

        let n = points.len();
        let mut ctx = Context {
            points,
            space,
            min_points: self.min_points,
            range: self.range,
            reachability: vec![f32::INFINITY; n],
            processed: vec![false; n],
            order: Vec::with_capacity(n),
            queue: BinaryHeap::new(),
        };

        for index in 0..n {
            if ctx.processed[index] {
                continue;
            }
            ctx.update(index);

            while let Some(entry) = ctx.queue.pop() {
                if ctx.processed[entry.index] {
                    continue;
                }
                ctx.update(entry.index);
            }
        }

        Ok(ReachabilityPlot {
            order: ctx.order,
            reachability: ctx.reachability,
        })
    }
}

impl Default for Optics {
    fn default() -> Self {
        Self::new(4, 0.5)
    }
}

/// The ordering OPTICS walked and the reachability it recorded for each point.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachabilityPlot {
    order: Vec<usize>,
    reachability: Vec<f32>,
}

impl ReachabilityPlot {
    /// Point indices in the order they were finalized.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Reachability per point index (`+inf` for points that started a walk).
    pub fn reachability(&self) -> &[f32] {
        &self.reachability
    }

    /// Cut clusters out of the ordering using `range` as drop threshold and membership bound.
    pub fn extract_clusters(&self, range: f32) -> Vec<Vec<usize>> {
        let mut clusters = Vec::new();
        let mut current = Vec::new();

        for (pos, &index) in self.order.iter().enumerate() {
            let reach = self.reachability[index];
            let next = self
                .order
                .get(pos + 1)
                .map_or(0.0, |&next| self.reachability[next]);

            if reach - next > range {
                let done = mem::take(&mut current);
                if done.len() > 1 {
                    clusters.push(done);
                }
            }

            if reach < range || reach == f32::INFINITY {
                current.push(index);
            }
        }

        if current.len() > 1 {
            clusters.push(current);
        }
        clusters
    }
}

/// Min-queue entry: lowest reachability pops first, ties by lowest index.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    reachability: f32,
    index: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .reachability
            .total_cmp(&self.reachability)
            .then_with(|| other.index.cmp(&self.index))
    }
}

struct Context<'a, T, S: ?Sized> {
    points: &'a [T],
    space: &'a S,
    min_points: usize,
    range: f32,
    reachability: Vec<f32>,
    processed: Vec<bool>,
    order: Vec<usize>,
    queue: BinaryHeap<QueueEntry>,
}

impl<T, S> Context<'_, T, S>
where
    S: MetricSpace<T> + ?Sized,
{
    /// Distance to the `min_points`-th nearest neighbor, if there are that many.
    ///
    /// Reorders `neighbors`.
    fn core_distance(&self, neighbors: &mut [(usize, f32)]) -> Option<f32> {
        if neighbors.len() < self.min_points {
            return None;
        }
        let k = self.min_points - 1;
        let (_, kth, _) = neighbors.select_nth_unstable_by(k, |a, b| a.1.total_cmp(&b.1));
        Some(kth.1)
    }

    fn update(&mut self, index: usize) {
        self.processed[index] = true;
        self.order.push(index);

        let mut neighbors = util::region_query(self.points, self.space, index, self.range);
        let Some(core) = self.core_distance(&mut neighbors) else {
            return;
        };
        trace!(
            "optics: point {} is core (core distance {}, {} neighbors)",
            index,
            core,
            neighbors.len()
        );

        for (neighbor, distance) in neighbors {
            if self.processed[neighbor] {
                continue;
            }
            let candidate = core.max(distance);
            let current = self.reachability[neighbor];
            if current == f32::INFINITY || candidate < current {
                self.reachability[neighbor] = candidate;
                self.queue.push(QueueEntry {
                    reachability: candidate,
                    index: neighbor,
                });
            }
        }
    }
}

impl Clustering for Optics {
    fn cluster_indices<T, S>(&self, points: &[T], space: &S) -> Result<Vec<Vec<usize>>>
    where
        S: MetricSpace<T> + ?Sized,
    {
        let plot = self.reachability_plot(points, space)?;
        let clusters = plot.extract_clusters(self.range);

        debug!(
            "optics: {} points, {} clusters (min_points={}, range={})",
            points.len(),
            clusters.len(),
            self.min_points,
            self.range
        );
        Ok(clusters)
    }
}
