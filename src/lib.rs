// Public API exports
pub mod clusterer;
pub mod dataset;
pub mod init;
pub mod report;

// Re-export main types for convenience
pub use clusterer::{
    kmeans, Assignments, Cluster, ClusterError, ClusterResult, EmptyClusterPolicy, KmeansConfig,
    Point, PointList, Termination,
};

pub use dataset::{load_tsv, read_tsv, DatasetError};

pub use init::{initial_centroids, InitError, InitStrategy};

pub use report::{OutputFormat, Report};
