use serde::{Deserialize, Serialize};

use crate::clusterer::distance::euclidean_distance;
use crate::clusterer::error::ClusterError;

/// Fixed-dimension vector of `f64` coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coords: Vec<f64>,
}

/// Ordered sequence of points; position is the point's identity
pub type PointList = Vec<Point>;

/// Centroid index for each data point, aligned by position
pub type Assignments = Vec<usize>;

impl Point {
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Origin of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self {
            coords: vec![0.0; dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Euclidean distance to another point of the same dimension
    pub fn distance(&self, other: &Point) -> Result<f64, ClusterError> {
        euclidean_distance(&self.coords, &other.coords)
    }

    /// Component-wise `self += other`
    pub fn accumulate(&mut self, other: &Point) -> Result<(), ClusterError> {
        if self.dim() != other.dim() {
            return Err(ClusterError::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            });
        }

        for (acc, x) in self.coords.iter_mut().zip(other.coords.iter()) {
            *acc += x;
        }

        Ok(())
    }

    /// Divide every coordinate by `divisor`
    pub fn scale_down(&mut self, divisor: f64) {
        for c in self.coords.iter_mut() {
            *c /= divisor;
        }
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

/// Why the driver stopped iterating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Converged,
    CapReached,
}

/// One cluster: its centroid and the positions of its member points
#[derive(Debug, Clone)]
pub struct Cluster {
    pub id: u32,
    pub point_ids: Vec<usize>,
    pub centroid: Point,
}

#[derive(Debug, Clone)]
pub struct ClusterResult {
    pub centroids: PointList,
    pub assignments: Assignments,
    pub iterations: usize,
    pub termination: Termination,
}

impl ClusterResult {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Group the parallel assignment vector into per-centroid clusters
    pub fn clusters(&self) -> Result<Vec<Cluster>, ClusterError> {
        let mut clusters: Vec<Cluster> = self
            .centroids
            .iter()
            .enumerate()
            .map(|(i, centroid)| Cluster {
                id: i as u32,
                point_ids: vec![],
                centroid: centroid.clone(),
            })
            .collect();

        for (point_id, &cluster_idx) in self.assignments.iter().enumerate() {
            clusters
                .get_mut(cluster_idx)
                .ok_or(ClusterError::InvalidAssignment {
                    point: point_id,
                    cluster: cluster_idx,
                })?
                .point_ids
                .push(point_id);
        }

        Ok(clusters)
    }

    /// Within-cluster sum of squared distances
    pub fn inertia(&self, data: &[Point]) -> Result<f64, ClusterError> {
        let mut total = 0.0;
        let pairs = data.iter().zip(self.assignments.iter()).enumerate();
        for (point_id, (point, &cluster_idx)) in pairs {
            let centroid = self
                .centroids
                .get(cluster_idx)
                .ok_or(ClusterError::InvalidAssignment {
                    point: point_id,
                    cluster: cluster_idx,
                })?;
            let d = point.distance(centroid)?;
            total += d * d;
        }
        Ok(total)
    }
}
