mod centroid;
mod config;
mod distance;
mod error;
mod kmeans;
mod types;


pub use centroid::{compute_centroid, CentroidUpdate};
pub use config::{EmptyClusterPolicy, KmeansConfig, DEFAULT_MAX_ITERATIONS};
pub use distance::euclidean_distance;
pub use error::ClusterError;
pub use kmeans::{assign, has_converged, kmeans, nearest_centroid, update_centroids};
pub use types::{Assignments, Cluster, ClusterResult, Point, PointList, Termination};
