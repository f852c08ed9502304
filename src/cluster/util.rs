use crate::error::{Error, Result};
use crate::space::MetricSpace;

// Per-point classification ids shared by every algorithm.
// - UNCLASSIFIED: never assigned yet
// - NOISE_ID: visited, but not density-reachable from any core point (may be promoted later)
// - anything > 0: a cluster id
pub(crate) const UNCLASSIFIED: i32 = 0;
pub(crate) const NOISE_ID: i32 = -1;

pub(crate) fn check_range(range: f32) -> Result<()> {
    if range.is_nan() || range < 0.0 {
        return Err(Error::InvalidParameter {
            name: "range",
            message: "must be non-negative",
        });
    }
    Ok(())
}

pub(crate) fn check_min_points(min_points: usize) -> Result<()> {
    if min_points == 0 {
        return Err(Error::InvalidParameter {
            name: "min_points",
            message: "must be at least 1",
        });
    }
    Ok(())
}

/// Find every other point within `range` of `points[index]`, with its distance.
///
/// `NaN` distances never compare `<= range`, so unrelated points are dropped here.
pub(crate) fn region_query<T, S>(
    points: &[T],
    space: &S,
    index: usize,
    range: f32,
) -> Vec<(usize, f32)>
where
    S: MetricSpace<T> + ?Sized,
{
    let point = &points[index];
    points
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != index)
        .map(|(idx, other)| (idx, space.distance(point, other)))
        .filter(|(_, d)| *d <= range)
        .collect()
}
