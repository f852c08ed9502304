use super::MetricSpace;
use crate::error::{Error, Result};

/// A point addressed by its row/column in a matrix space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MatrixCell(pub usize);

impl MatrixCell {
    /// Create a cell for matrix index `value`.
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    /// The matrix index of this cell.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl From<usize> for MatrixCell {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Dense, unweighted connectivity matrix.
///
/// This is the boolean specialization of a metric space: connected cells are at distance `0.0`,
/// everything else is `NaN`. Weights passed to [`MetricSpace::add_connection`] are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSpace {
    size: usize,
    connections: Vec<bool>,
}

impl MatrixSpace {
    /// Create a `size x size` matrix with no connections.
    ///
    /// Fails when `size * size` overflows `usize`.
    pub fn new(size: usize) -> Result<Self> {
        let cells = size.checked_mul(size).ok_or(Error::InvalidParameter {
            name: "size",
            message: "size * size overflows usize",
        })?;
        Ok(Self {
            size,
            connections: vec![false; cells],
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `a` and `b` are connected.
    pub fn is_connected(&self, a: &MatrixCell, b: &MatrixCell) -> bool {
        self.offset(a, b)
            .map(|i| self.connections[i])
            .unwrap_or(false)
    }

    fn offset(&self, a: &MatrixCell, b: &MatrixCell) -> Option<usize> {
        (a.0 < self.size && b.0 < self.size).then(|| a.0 * self.size + b.0)
    }

    fn check_bounds(&self, cell: &MatrixCell) -> Result<()> {
        if cell.0 >= self.size {
            return Err(Error::IndexOutOfBounds {
                index: cell.0,
                size: self.size,
            });
        }
        Ok(())
    }
}

impl MetricSpace<MatrixCell> for MatrixSpace {
    fn distance(&self, a: &MatrixCell, b: &MatrixCell) -> f32 {
        if self.is_connected(a, b) {
            0.0
        } else {
            f32::NAN
        }
    }

    fn add_connection(&mut self, a: &MatrixCell, b: &MatrixCell, _distance: f32) -> Result<()> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;

        let n = self.size;
        self.connections[a.0 * n + b.0] = true;
        self.connections[b.0 * n + a.0] = true;
        Ok(())
    }
}
