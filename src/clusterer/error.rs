use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("Dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Cannot cluster without at least one centroid")]
    EmptyCentroids,

    #[error("Centroid {index} has no assigned points")]
    EmptyCluster { index: usize },

    #[error("Point {point} is assigned to centroid {cluster}, which does not exist")]
    InvalidAssignment { point: usize, cluster: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
