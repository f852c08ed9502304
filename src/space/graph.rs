use std::collections::HashMap;
use std::hash::Hash;

use super::{check_weight, MetricSpace};
use crate::error::Result;

/// A weighted, undirected graph stored as adjacency maps.
///
/// Points are the graph's nodes. Any two nodes without an edge are unrelated (`NaN`).
#[derive(Debug, Clone)]
pub struct GraphSpace<T> {
    adjacency: HashMap<T, HashMap<T, f32>>,
}

impl<T: Eq + Hash + Clone> GraphSpace<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Iterate the neighbors of `node` with their edge weights.
    pub fn neighbors<'a>(&'a self, node: &T) -> impl Iterator<Item = (&'a T, f32)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, &d)| (n, d)))
    }

    /// Number of nodes that have at least one edge.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(HashMap::len).sum();
        let self_loops = self
            .adjacency
            .iter()
            .filter(|(node, edges)| edges.contains_key(*node))
            .count();
        (directed + self_loops) / 2
    }
}

impl<T: Eq + Hash + Clone> Default for GraphSpace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> MetricSpace<T> for GraphSpace<T> {
    fn distance(&self, a: &T, b: &T) -> f32 {
        self.adjacency
            .get(a)
            .and_then(|edges| edges.get(b))
            .copied()
            .unwrap_or(f32::NAN)
    }

    fn add_connection(&mut self, a: &T, b: &T, distance: f32) -> Result<()> {
        check_weight(distance)?;
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), distance);
        self.adjacency
            .entry(b.clone())
            .or_default()
            .insert(a.clone(), distance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_graph_connection_is_symmetric() {
        let mut graph = GraphSpace::new();
        graph.add_connection(&"a", &"b", 2.5).unwrap();

        assert_eq!(graph.distance(&"a", &"b"), 2.5);
        assert_eq!(graph.distance(&"b", &"a"), 2.5);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_graph_unconnected_is_nan() {
        let mut graph = GraphSpace::new();
        graph.add_connection(&1u32, &2, 1.0).unwrap();

        assert!(graph.distance(&1, &3).is_nan());
        assert!(graph.distance(&3, &4).is_nan());
    }

    #[test]
    fn test_graph_reconnect_replaces_weight() {
        let mut graph = GraphSpace::new();
        graph.add_connection(&1u32, &2, 1.0).unwrap();
        graph.add_connection(&2u32, &1, 4.0).unwrap();

        assert_eq!(graph.distance(&1, &2), 4.0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_graph_neighbors() {
        let mut graph = GraphSpace::with_capacity(3);
        graph.add_connection(&'a', &'b', 1.0).unwrap();
        graph.add_connection(&'a', &'c', 2.0).unwrap();

        let mut neighbors: Vec<(char, f32)> = graph.neighbors(&'a').map(|(n, d)| (*n, d)).collect();
        neighbors.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(neighbors, vec![('b', 1.0), ('c', 2.0)]);
        assert_eq!(graph.neighbors(&'z').count(), 0);
    }

    #[test]
    fn test_graph_rejects_bad_weights() {
        let mut graph = GraphSpace::new();
        assert!(matches!(
            graph.add_connection(&1u32, &2, f32::NAN),
            Err(Error::InvalidParameter { name: "distance", .. })
        ));
        assert!(graph.add_connection(&1u32, &2, -1.0).is_err());
        assert_eq!(graph.node_count(), 0);
    }
}
