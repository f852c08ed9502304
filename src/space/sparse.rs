use std::collections::HashMap;

use super::{check_weight, MatrixCell, MetricSpace};
use crate::error::Result;

/// Weighted distances between matrix cells, stored only for registered pairs.
///
/// Both orientations of every pair are kept so lookups never need to normalize the key.
#[derive(Debug, Clone, Default)]
pub struct SparseMatrixSpace {
    connections: HashMap<(usize, usize), f32>,
}

impl SparseMatrixSpace {
    /// Create an empty sparse matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered (undirected) connections.
    pub fn len(&self) -> usize {
        let loops = self.connections.keys().filter(|(r, c)| r == c).count();
        (self.connections.len() + loops) / 2
    }

    /// Whether no connection has been registered.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl MetricSpace<MatrixCell> for SparseMatrixSpace {
    fn distance(&self, a: &MatrixCell, b: &MatrixCell) -> f32 {
        self.connections
            .get(&(a.0, b.0))
            .copied()
            .unwrap_or(f32::NAN)
    }

    fn add_connection(&mut self, a: &MatrixCell, b: &MatrixCell, distance: f32) -> Result<()> {
        check_weight(distance)?;
        self.connections.insert((a.0, b.0), distance);
        self.connections.insert((b.0, a.0), distance);
        Ok(())
    }
}
