//! Connected components: clusters are the connected pieces of the "within range" graph.
//!
//! Two points are linked when `distance(a, b) <= range`. Every point ends up in exactly one
//! cluster; there is no noise. With `range = +inf` any registered relation counts as a link, so
//! this is plain graph connectivity.
//!
//! ## Algorithm
//!
//! For each unassigned point (input order), open a new cluster holding just that point. The
//! cluster list doubles as the worklist: walk it front to back, and for each member scan every
//! still-unassigned point, appending (and immediately assigning) those within range. The walk
//! stops when it reaches the end of the list without appending.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance queries in the worst case.
//! - **Space**: O(n) for the classification ids.

use tracing::{debug, trace};

use super::traits::Clustering;
use super::util::{self, UNCLASSIFIED};
use crate::error::Result;
use crate::space::MetricSpace;

/// Connected components clustering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectedComponents {
    /// Maximum distance at which two points count as connected.
    range: f32,
}

impl ConnectedComponents {
    /// Create a clusterer that links any related points (`range = +inf`).
    pub fn new() -> Self {
        Self {
            range: f32::INFINITY,
        }
    }

    /// Set the connection range.
    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    /// The configured connection range.
    pub fn range(&self) -> f32 {
        self.range
    }
}

impl Default for ConnectedComponents {
    fn default() -> Self {
        Self::new()
    }
}

struct Context<'a, T, S: ?Sized> {
    points: &'a [T],
    space: &'a S,
    range: f32,
    cluster_ids: Vec<i32>,
    current_cluster_id: i32,
}

impl<T, S> Context<'_, T, S>
where
    S: MetricSpace<T> + ?Sized,
{
    fn create_cluster(&mut self, index: usize) -> Vec<usize> {
        self.current_cluster_id += 1;
        let id = self.current_cluster_id;
        self.cluster_ids[index] = id;
        trace!("connected components: opening cluster {} at point {}", id, index);

        let points = self.points;
        let mut cluster = vec![index];
        let mut cursor = 0;
        while cursor < cluster.len() {
            let point = &points[cluster[cursor]];
            for (j, other) in points.iter().enumerate() {
                if self.cluster_ids[j] != UNCLASSIFIED {
                    continue;
                }
                if self.space.distance(point, other) <= self.range {
                    cluster.push(j);
                    self.cluster_ids[j] = id;
                }
            }
            cursor += 1;
        }
        cluster
    }
}

impl Clustering for ConnectedComponents {
    fn cluster_indices<T, S>(&self, points: &[T], space: &S) -> Result<Vec<Vec<usize>>>
    where
        S: MetricSpace<T> + ?Sized,
    {
        util::check_range(self.range)?;

        let mut ctx = Context {
            points,
            space,
            range: self.range,
            cluster_ids: vec![UNCLASSIFIED; points.len()],
            current_cluster_id: 0,
        };

        let mut clusters = Vec::new();
        for index in 0..points.len() {
            if ctx.cluster_ids[index] != UNCLASSIFIED {
                continue;
            }
            clusters.push(ctx.create_cluster(index));
        }

        debug!(
            "connected components: {} points, {} clusters (range={})",
            points.len(),
            clusters.len(),
            self.range
        );
        Ok(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::space::GraphSpace;

    fn chain(n: usize, step: f32) -> (Vec<usize>, GraphSpace<usize>) {
        let points: Vec<usize> = (0..n).collect();
        let mut space = GraphSpace::new();
        for i in 1..n {
            space.add_connection(&(i - 1), &i, step).unwrap();
        }
        (points, space)
    }

    #[test]
    fn test_cc_two_components() {
        let points = ["a", "b", "c", "d"];
        let mut space = GraphSpace::new();
        space.add_connection(&"a", &"d", 1.0).unwrap();
        space.add_connection(&"d", &"c", 1.0).unwrap();

        let clusters = ConnectedComponents::new().cluster(&points, &space).unwrap();
        assert_eq!(clusters, vec![vec!["a", "d", "c"], vec!["b"]]);
    }

    #[test]
    fn test_cc_worklist_reaches_through_chain() {
        // Point 0 only touches 1 directly; the rest is reached through appended members.
        let (points, space) = chain(6, 1.0);
        let clusters = ConnectedComponents::new()
            .cluster_indices(&points, &space)
            .unwrap();
        assert_eq!(clusters, vec![vec![0, 1, 2, 3, 4, 5]]);
    }

    #[test]
    fn test_cc_range_cuts_edges() {
        let points = [0usize, 1, 2];
        let mut space = GraphSpace::new();
        space.add_connection(&0usize, &1, 1.0).unwrap();
        space.add_connection(&1usize, &2, 3.0).unwrap();

        let cc = ConnectedComponents::new().with_range(2.0);
        assert_eq!(cc.range(), 2.0);
        let clusters = cc.cluster_indices(&points, &space).unwrap();
        assert_eq!(clusters, vec![vec![0, 1], vec![2]]);

        // Range is inclusive.
        let clusters = ConnectedComponents::new()
            .with_range(3.0)
            .cluster_indices(&points, &space)
            .unwrap();
        assert_eq!(clusters, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_cc_no_noise() {
        let points = [10usize, 20, 30];
        let space = GraphSpace::<usize>::new();

        let labels = ConnectedComponents::new()
            .fit_predict_with_noise(&points, &space)
            .unwrap();
        assert_eq!(labels, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_cc_empty() {
        let points: Vec<usize> = vec![];
        let space = GraphSpace::new();
        let clusters = ConnectedComponents::new().cluster(&points, &space).unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_cc_invalid_range() {
        let (points, space) = chain(3, 1.0);

        let err = ConnectedComponents::new()
            .with_range(-1.0)
            .cluster_indices(&points, &space)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "range", .. }));

        assert!(ConnectedComponents::new()
            .with_range(f32::NAN)
            .cluster_indices(&points, &space)
            .is_err());
    }
}
