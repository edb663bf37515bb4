use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("Number of clusters must be at least 1")]
    InvalidK,

    #[error("Cannot pick {k} centroids from {points} points")]
    TooManyClusters { k: usize, points: usize },
}
