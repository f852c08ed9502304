use crate::error::Result;
use crate::space::MetricSpace;

/// Label given to points that end up in no cluster.
pub const NOISE: usize = usize::MAX;

/// Common interface for clustering algorithms over a metric space.
pub trait Clustering {
    /// Cluster `points`, returning each cluster as indices into `points`.
    ///
    /// Clusters and their members are in discovery order. Points missing from every cluster are
    /// noise.
    fn cluster_indices<T, S>(&self, points: &[T], space: &S) -> Result<Vec<Vec<usize>>>
    where
        S: MetricSpace<T> + ?Sized;

    /// Cluster `points`, returning owned copies of the points in each cluster.
    fn cluster<T, S>(&self, points: &[T], space: &S) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
        S: MetricSpace<T> + ?Sized,
    {
        let clusters = self.cluster_indices(points, space)?;
        Ok(clusters
            .into_iter()
            .map(|members| members.into_iter().map(|i| points[i].clone()).collect())
            .collect())
    }

    /// One label per point: the position of its cluster in [`Clustering::cluster_indices`], or
    /// [`NOISE`].
    fn fit_predict<T, S>(&self, points: &[T], space: &S) -> Result<Vec<usize>>
    where
        S: MetricSpace<T> + ?Sized,
    {
        let clusters = self.cluster_indices(points, space)?;
        let mut labels = vec![NOISE; points.len()];
        for (label, members) in clusters.iter().enumerate() {
            for &i in members {
                labels[i] = label;
            }
        }
        Ok(labels)
    }

    /// Like [`Clustering::fit_predict`], with noise as `None`.
    fn fit_predict_with_noise<T, S>(&self, points: &[T], space: &S) -> Result<Vec<Option<usize>>>
    where
        S: MetricSpace<T> + ?Sized,
    {
        let labels = self.fit_predict(points, space)?;
        Ok(labels
            .into_iter()
            .map(|l| if l == NOISE { None } else { Some(l) })
            .collect())
    }
}
